//! CLI entry point for the random image collage generator

use clap::Parser;
use gridcollage::io::cli::{Cli, CollageRunner};
use gridcollage::io::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    let result = cli.to_config().and_then(|config| {
        let runner = CollageRunner::new(config, cli.should_show_progress());
        runner.run().map(|_| runner.config().output_path.clone())
    });

    match result {
        Ok(output_path) => {
            #[allow(clippy::print_stdout)]
            {
                println!("Saved collage image to {}", output_path.display());
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
