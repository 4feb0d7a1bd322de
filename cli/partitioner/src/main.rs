//! cloudtrail-partitioner CLI
//!
//! Registers CloudTrail log partitions with Athena.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if let Err(err) = partition(args).await {
        eprintln!("{}", run::error_line(&err));
        std::process::exit(1);
    }
}

async fn partition(args: Cli) -> anyhow::Result<()> {
    // Initialize logging (to stderr, so stdout only carries results)
    run::init_logging(args.log_level)?;

    let stats = run::execute(args).await?;

    println!("{} partitions processed", stats.partitions);

    // Report details to stderr
    eprintln!();
    eprintln!("Partitioning completed:");
    if let Some(org_id) = &stats.org_id {
        eprintln!("  Organization:         {}", org_id);
    }
    eprintln!("  Accounts:             {}", stats.accounts);
    eprintln!("  Regions:              {}", stats.regions);
    eprintln!("  Partitions:           {}", stats.partitions);
    eprintln!("  Statements submitted: {}", stats.statements_submitted);

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:             {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }

    Ok(())
}
