use clap::Parser;
use vertex_probe::structs::cli::Cli;
use vertex_probe::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    CommandRunner::run_command(cli).await
}
