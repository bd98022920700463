use crate::cli::ConfigArgs;
use crate::config;
use crate::error::Result;
use crate::report;
use std::io;

pub fn run(config_args: &ConfigArgs) -> Result<()> {
    let app_config = config::build_config(config_args, None)?;
    report::write_feed_table(&mut io::stdout().lock(), &app_config.feed_table)?;
    Ok(())
}
