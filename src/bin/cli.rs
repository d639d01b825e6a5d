use clap::{Parser, Subcommand};
use movie_trending_engine::{EngineConfig, MovieEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "movie-trending")]
#[command(about = "Movie search with locally tracked trending searches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database path (overrides DB_PATH)
    #[arg(short, long)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog; an empty query lists popular movies
    Search {
        /// Search query
        #[arg(default_value = "")]
        query: String,

        /// Maximum movies to print
        #[arg(short, long, default_value = "20")]
        max_results: usize,
    },

    /// Show the most searched terms
    Trending {
        /// Number of entries (overrides TRENDING_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show tracking statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_trending=info,movie_trending_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    tracing::debug!("Database: {}", config.db_path);

    let engine = MovieEngine::new(&config)?;

    match cli.command {
        Commands::Search { query, max_results } => {
            if query.is_empty() {
                println!("🔥 Popular movies");
            } else {
                println!("🔍 Searching for: {}", query);
            }

            let movies = engine.search(&query).await?;

            if movies.is_empty() {
                println!("\nNo movies found");
            }

            for movie in movies.iter().take(max_results) {
                let rating = movie
                    .vote_average
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_else(|| "N/A".to_string());
                let language = movie.original_language.as_deref().unwrap_or("?");

                println!("   {} ⭐ {} [{}] #{}", movie.display_name(), rating, language, movie.id);
            }
        }

        Commands::Trending { limit } => {
            let trending = engine.trending(limit.unwrap_or(config.trending_limit));

            if trending.is_empty() {
                println!("No trending searches yet");
            } else {
                println!("📈 Trending Movies:");
                for (i, record) in trending.iter().enumerate() {
                    println!(
                        "   {}. {} ({} searches) #{} {}",
                        i + 1,
                        record.search_term,
                        record.count,
                        record.movie_id,
                        record.poster_url
                    );
                }
            }
        }

        Commands::Stats => {
            let stats = engine.stats();

            println!("📊 Search Statistics:");
            println!("   Tracked terms: {}", stats.total_terms);
            println!("   Total searches: {}", stats.total_searches);
            println!("   Top term: {}", stats.top_term.as_deref().unwrap_or("N/A"));
        }
    }

    Ok(())
}
