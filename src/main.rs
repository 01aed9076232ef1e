use std::io;

use anyhow::Result;
use clap::Parser;

use vendor_catalog::app::run;
use vendor_catalog::cli::Cli;
use vendor_catalog::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.catalog.clone(), cli.level_filter());

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &config, &mut out)
}
