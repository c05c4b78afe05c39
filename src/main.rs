//! Depot CLI - producer/consumer simulation runner

use clap::{Parser, Subcommand};
use colored::Colorize;

use depot::consumer::{CONSUMPTION_TARGET, RETRY_BACKOFF};
use depot::producer::PRODUCTION_RUNS;
use depot::runner::{SimulationConfig, SimulationRunner};
use depot::DepotError;

#[derive(Parser)]
#[command(name = "depot")]
#[command(about = "Depot - producer/consumer simulation over a shared stock")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation to completion
    Run,

    /// Print the wired parameters and expected outcome without running
    Check,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_simulation().await,
        Commands::Check => check_parameters(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run_simulation() -> Result<(), DepotError> {
    let config = SimulationConfig::default();

    println!(
        "{} Starting producer and consumer (consumer retry: {} ms)",
        "→".cyan(),
        RETRY_BACKOFF.as_millis().to_string().cyan().bold(),
    );

    let runner = SimulationRunner::new(config);
    let report = runner.run().await?;

    println!(
        "{} Produced {} | consumed {} in {:.2?}",
        "✓".green(),
        report.produced.to_string().green().bold(),
        report.consumed.to_string().green().bold(),
        report.duration,
    );
    println!("Final stock: {}", report.final_stock);

    Ok(())
}

fn check_parameters() -> Result<(), DepotError> {
    let config = SimulationConfig::default();

    println!("{} Simulation wiring", "→".cyan());
    println!("  Production runs: {}", PRODUCTION_RUNS);
    println!("  Consumption target: {}", CONSUMPTION_TARGET);
    println!(
        "  Producer pause: {} ms",
        config.producer_pause.as_millis()
    );
    println!(
        "  Consumer pause: {} ms",
        config.consumer_pause.as_millis()
    );
    println!("  Consumer retry backoff: {} ms", RETRY_BACKOFF.as_millis());
    println!(
        "  Expected final stock: {}",
        PRODUCTION_RUNS - CONSUMPTION_TARGET
    );

    Ok(())
}
