use clap::Parser;

use tally::cli::{self, Cli};
use tally::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    cli::run(cli)
}
