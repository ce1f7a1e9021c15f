use rand::rngs::StdRng;
use rand::SeedableRng;
use rso_match::config::Settings;
use rso_match::core::Matcher;
use rso_match::quiz::{question_bank, QuizSession, TerminalQuiz};
use rso_match::services::load_catalog;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    // Initialize logging, environment wins over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting RSO match quiz...");

    let catalog = load_catalog(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path.display(), e);
        std::io::Error::other(e)
    })?;

    let matcher = Matcher::new(catalog);
    info!("Matcher initialized with {} catalog entries", matcher.catalog().len());

    let rng = match settings.matching.seed {
        Some(seed) => {
            info!("Using fixed selection seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut quiz = TerminalQuiz::new(
        QuizSession::new(question_bank()),
        matcher,
        settings.quiz.transition_delay(),
        settings.matching.result_count,
        rng,
        std::io::stdout(),
    );

    quiz.run(BufReader::new(tokio::io::stdin())).await?;

    info!("Quiz closed");
    Ok(())
}
