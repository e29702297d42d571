use colored::Colorize;

use brl_ledger::RoyaltyLedger;
use brl_server::{RoyaltyServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Seed(args) => cmd_seed(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = match args.bind {
        Some(bind_addr) => ServerConfig { bind_addr },
        None => ServerConfig::from_env(),
    };
    println!(
        "{} Royalty API on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );
    RoyaltyServer::new(config).serve().await?;
    Ok(())
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let ledger = RoyaltyLedger::seeded();
    for summary in ledger.author_summaries() {
        println!(
            "{}  {}  earnings {}  balance {}",
            summary.id.to_string().yellow(),
            summary.name.bold(),
            format!("₹{}", summary.total_earnings).green(),
            format!("₹{}", summary.current_balance).cyan()
        );
        if args.books {
            let detail = ledger.author_detail(summary.id)?;
            for book in detail.books {
                println!(
                    "    {}  sold {}  royalty {}",
                    book.title.bold(),
                    book.total_sold,
                    format!("₹{}", book.total_royalty).green()
                );
            }
        }
    }
    Ok(())
}
