use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "brl",
    about = "BookLeaf Royalty Ledger — author royalty accounting API",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the royalty API server
    Serve(ServeArgs),
    /// Print the seeded ledger universe
    Seed(SeedArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind; default is all interfaces on $PORT (or 5000)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct SeedArgs {
    /// Also list each author's books with their sales totals
    #[arg(long)]
    pub books: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_bind_address() {
        let cli = Cli::parse_from(["brl", "serve", "--bind", "0.0.0.0:8080"]);
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
            }
            _ => panic!("expected serve command"),
        }
    }
}
