//! Clean command - run the pipeline over a file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use refinery::RecordLoader;

use crate::cli::ModelArgs;

pub fn run(
    file: PathBuf,
    mode: Option<String>,
    output: Option<PathBuf>,
    delimiter: Option<u8>,
    model: ModelArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = RecordLoader::new();
    if let Some(delimiter) = delimiter {
        loader = loader.with_delimiter(delimiter);
    }
    let records = loader.load(&file)?;
    if verbose {
        eprintln!("Loaded {} records from {}", records.len(), file.display());
    }

    let processor = model.build_processor()?;
    let envelope = processor.process(&records, mode.as_deref());
    let json = serde_json::to_string_pretty(&envelope)?;

    match &output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    if let Some(error) = envelope.error() {
        eprintln!("{} {}", "Batch rejected:".red().bold(), error);
        return Err(error.to_string().into());
    }

    let failed = envelope.error_rows().len();
    let summary = format!(
        "{} rows, {} cleaned, {} kept original (mode: {})",
        records.len(),
        envelope.data().len() - failed,
        failed,
        envelope.used_ai()
    );
    if failed == 0 {
        eprintln!("{} {}", "Done:".green().bold(), summary);
    } else {
        eprintln!("{} {}", "Done with fallbacks:".yellow().bold(), summary);
        for row in envelope.error_rows() {
            eprintln!("  row {}: {}", row.row_index, row.error);
        }
    }

    Ok(())
}
