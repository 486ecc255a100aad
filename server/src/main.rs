use clap::Parser;
use resume_server::{commands::Command, Result};
use tracing_common::{setup_sentry, setup_tracing};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _sentry_guard = setup_sentry();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    // keep stdout clean for piping the markup somewhere else
    if !matches!(command, Command::Print) {
        setup_tracing("resume_server")?;
    }

    command.run().await
}
