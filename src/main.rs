use clap::Parser;

use counterkit::cli::{self, CliArgs};
use counterkit::init_logging;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(args.log_json)?;
    tracing::debug!("CounterKit {} (built {})", counterkit::VERSION, counterkit::BUILD_DATE);

    let report = cli::run(&args)?;
    print!("{}", report);

    Ok(())
}
