use clap::Parser;
use recruiting_board::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::inspect::run(cli.command).await
}
