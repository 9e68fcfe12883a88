use clap::{Parser, Subcommand};
use obit_match_engine::{
    highlight::render_marked, JsonFileSource, MatchEngine, ScoredMatch, SearchOptions, SearchQuery,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "obit-match-cli")]
#[command(about = "Obituary record matching CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset path
    #[arg(short, long, env = "OBIT_DATA", default_value = "data.json")]
    data: String,

    /// Score records in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a person
    Search {
        /// Name to search for
        name: String,

        /// Birth year (ignored when not a number)
        #[arg(short, long)]
        year: Option<String>,

        /// Print matches as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Run a bundled sample query
    Sample {
        /// Sample index as listed by `samples`
        index: usize,
    },

    /// List bundled sample queries
    Samples,

    /// Show dataset statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obit_match_cli=info,obit_match_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let source = JsonFileSource::new(&cli.data);
    let engine = MatchEngine::from_source(&source).await?.with_options(SearchOptions {
        parallel: cli.parallel,
        ..SearchOptions::default()
    });

    match cli.command {
        Commands::Search { name, year, json } => {
            let query = SearchQuery::from_input(name, year.as_deref());
            run_search(&engine, &query, json)?;
        }

        Commands::Sample { index } => {
            let Some(sample) = engine.dataset().samples().get(index) else {
                anyhow::bail!(
                    "No sample #{} ({} available)",
                    index,
                    engine.dataset().samples().len()
                );
            };
            let query = SearchQuery::new(sample.name.clone()).with_year(sample.year);
            run_search(&engine, &query, false)?;
        }

        Commands::Samples => {
            println!("📋 Samples:");
            for (i, sample) in engine.dataset().samples().iter().enumerate() {
                match sample.year {
                    Some(year) => println!("   {}. {} ({})", i, sample.name, year),
                    None => println!("   {}. {}", i, sample.name),
                }
            }
        }

        Commands::Stats => {
            let stats = engine.dataset().stats();

            println!("📊 Dataset Statistics:");
            println!("   Source: {}", cli.data);
            println!("   Records: {}", stats.records);
            println!("   Businesses: {}", stats.businesses);
            println!("   Samples: {}", stats.samples);
        }
    }

    Ok(())
}

fn run_search(engine: &MatchEngine, query: &SearchQuery, json: bool) -> anyhow::Result<()> {
    if query.is_blank() {
        anyhow::bail!("Name must not be empty");
    }

    let response = engine.search(query);

    if json {
        let payload: Vec<serde_json::Value> = response
            .matches
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match query.year {
        Some(year) => println!("🔍 Searching for: {} (born {})", query.text, year),
        None => println!("🔍 Searching for: {}", query.text),
    }

    if response.is_empty() {
        println!("\nNo matches found. Try a different name or birth year.");
        return Ok(());
    }

    for scored in &response.matches {
        print_card(engine, scored, query);
    }

    println!(
        "\n{} of {} records matched in {:.2}ms",
        response.matches.len(),
        response.candidates,
        response.latency_ms
    );

    Ok(())
}

fn print_card(engine: &MatchEngine, scored: &ScoredMatch<'_>, query: &SearchQuery) {
    let record = scored.record;
    let name = render_marked(&engine.highlight(scored, query), "[", "]");

    println!("\n✅ {} - {}% Match", name, scored.match_percent());
    if !record.aliases.is_empty() {
        println!("   Also known as: {}", record.aliases.join(", "));
    }
    println!("   Years: {} - {}", record.birth_year, record.death_year);
    println!("   Residence: {}", record.last_residence);
    println!("   Occupation: {}", record.occupation);

    let affiliations = engine.dataset().affiliated_businesses(record);
    println!("   Business Affiliations ({}):", affiliations.len());
    for view in affiliations {
        match view.category() {
            Some(category) => println!(
                "     - {} ({}) • {}",
                view.affiliation.name, view.affiliation.role, category
            ),
            None => println!("     - {} ({})", view.affiliation.name, view.affiliation.role),
        }
    }
}
