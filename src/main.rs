use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli::Cli { config, command } = cli::Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(config.as_deref())?;
    log::debug!("{cfg:?}");

    // All gateways are `!Send`.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(commands::run(cfg, command))
}
