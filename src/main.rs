#![forbid(unsafe_code)]

//! List-files harness
//!
//! Runs the list-files UDF against a local directory, playing the role of the
//! host engine: it supplies the base path and prints the emitted rows.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::error;
use std::process::ExitCode;

use list_files_udf::{AppError, BucketFs};

#[derive(Parser, Debug)]
#[command(name = "list-files")]
#[command(about = "Recursively list files with their size, as the BucketFS UDF does")]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one tab-separated row per file, ordered by full path
    List {
        /// Base path to list
        path: String,
    },
    /// Print the absolute path of a file with the given name
    Find {
        /// Base path to search
        path: String,
        /// File name to look for
        name: String,
    },
}

/**
 * Main function
 *
 * Parses command-line arguments, initializes the logger and runs the
 * selected command. Errors are logged and turned into a failing exit code.
 */
fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match execute(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: &Commands) -> Result<(), AppError> {
    match command {
        Commands::List { path } => {
            for file in BucketFs::new(path.as_str())?.list_files()? {
                println!("{}\t{}\t{}", file.name, file.path, file.size);
            }
            Ok(())
        }
        Commands::Find { path, name } => {
            let absolute = BucketFs::new(path.as_str())?.find_absolute_path(name)?;
            println!("{}", absolute);
            Ok(())
        }
    }
}
