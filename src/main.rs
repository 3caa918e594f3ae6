use clap::Parser;

use kmlquery::cli::Cli;
use kmlquery::interfaces::cli::run_cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
