use clap::Parser;
use csvtable::{CsvError, CsvReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the CSV file
    path: PathBuf,

    /// Print only the number of records
    #[arg(short, long)]
    count: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Log to stderr, filtered by `CSVTABLE_LOG` or `RUST_LOG`.
///
/// Stays silent unless one of them is set or `--verbose` is passed.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if let Ok(val) = std::env::var("CSVTABLE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CsvError> {
    let mut reader = CsvReader::open(&cli.path)?;

    if cli.count {
        let total = reader.rows().count();
        println!("{}", total);
    } else {
        for row in reader.rows() {
            println!("{:?}", row);
        }
    }

    debug!(rows = reader.row_count(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CsvError::SourceNotFound { path }) => {
            eprintln!("Error: no CSV file at {}", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
