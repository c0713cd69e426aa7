use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod device;

#[derive(Parser)]
#[command(name = "rapport-cli", version, about = "Rapport engagement health CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify elapsed days into a decay tier
    Classify(commands::classify::ClassifyArgs),
    /// Show the banner policy for a tier
    Policy {
        /// Tier name or color (e.g. "at_risk", "orange")
        tier: String,
    },
    /// Feedback pattern catalog
    Pattern {
        #[command(subcommand)]
        action: commands::pattern::PatternAction,
    },
    /// Play a feedback pattern on the console device
    Play {
        /// Catalog name (e.g. "MatchHeartbeat", "HealthPulse(red)")
        name: String,
    },
    /// Play the cue for a social event (e.g. "match", "health:red", "warmth:hot")
    Event { event: String },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RAPPORT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Policy { tier } => commands::classify::run_policy(&tier),
        Commands::Pattern { action } => commands::pattern::run(action),
        Commands::Play { name } => commands::play::run_pattern(&name),
        Commands::Event { event } => commands::play::run_event(&event),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
