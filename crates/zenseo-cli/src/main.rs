use clap::Parser;
use zenseo_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let target = logging::init_with_fallback(cli.verbose);
    tracing::debug!(?target, command = ?cli.command, "starting");

    if let Err(err) = cli.run() {
        tracing::error!("{err:#}");
        eprintln!("zenseo error: {:#}", err);
        std::process::exit(1);
    }
}
