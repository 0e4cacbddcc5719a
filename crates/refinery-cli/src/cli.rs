//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use refinery::{BatchProcessor, HuggingFaceModel, ModelConfig, RefineryError};

/// Refinery: clean and enrich tabular records
#[derive(Parser)]
#[command(name = "refinery")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service exposing POST /clean_enrich
    Serve {
        /// Address to bind
        #[arg(long, env = "REFINERY_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port for web server
        #[arg(short, long, env = "REFINERY_PORT", default_value = "8000")]
        port: u16,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Clean a JSON, CSV or TSV file and print the response envelope
    Clean {
        /// Path to the records file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Strategy mode (basic, statistical, generative)
        #[arg(short, long)]
        mode: Option<String>,

        /// Output path for the envelope JSON (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter for delimited files (single character or "tab")
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<u8>,

        #[command(flatten)]
        model: ModelArgs,
    },
}

/// Parse a delimiter argument into a single byte.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("Delimiter must be a single ASCII character, got '{}'", s)),
        },
    }
}

/// Generative model settings.
#[derive(Args, Clone, Debug)]
pub struct ModelArgs {
    /// Hugging Face API token (enables generative mode)
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    pub hf_api_key: Option<String>,

    /// Hugging Face model identifier
    #[arg(long, env = "HUGGINGFACE_MODEL", default_value = "gpt2")]
    pub hf_model: String,

    /// Per-call timeout for model requests, in seconds
    #[arg(long, env = "REFINERY_MODEL_TIMEOUT", default_value = "20")]
    pub timeout_secs: u64,

    /// Maximum tokens the model may generate per row
    #[arg(long, env = "REFINERY_MAX_NEW_TOKENS", default_value = "256")]
    pub max_new_tokens: usize,
}

impl ModelArgs {
    /// Model configuration from the parsed flags.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default()
            .with_model(&self.hf_model)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_new_tokens(self.max_new_tokens)
    }

    /// Build a processor with the Hugging Face model attached.
    pub fn build_processor(&self) -> Result<BatchProcessor, RefineryError> {
        let model = HuggingFaceModel::with_config(self.hf_api_key.clone(), self.model_config())?;
        Ok(BatchProcessor::new().with_model(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_clean_defaults() {
        let cli = Cli::try_parse_from(["refinery", "clean", "records.csv"]).unwrap();
        match cli.command {
            Commands::Clean { file, mode, output, delimiter, model } => {
                assert_eq!(file, PathBuf::from("records.csv"));
                assert!(mode.is_none());
                assert!(output.is_none());
                assert!(delimiter.is_none());
                assert_eq!(model.timeout_secs, 20);
            }
            _ => panic!("expected clean"),
        }
    }

    #[test]
    fn test_clean_delimiter_flag() {
        for (arg, expected) in [(";", b';'), ("tab", b'\t'), ("|", b'|')] {
            let cli = Cli::try_parse_from(["refinery", "clean", "records.txt", "-d", arg]).unwrap();
            match cli.command {
                Commands::Clean { delimiter, .. } => assert_eq!(delimiter, Some(expected)),
                _ => panic!("expected clean"),
            }
        }

        assert!(Cli::try_parse_from(["refinery", "clean", "records.txt", "-d", ";;"]).is_err());
        assert!(Cli::try_parse_from(["refinery", "clean", "records.txt", "-d", "é"]).is_err());
    }

    #[test]
    fn test_model_config_from_flags() {
        let cli = Cli::try_parse_from([
            "refinery",
            "serve",
            "--hf-model",
            "tiiuae/falcon-7b-instruct",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { model, .. } => {
                let config = model.model_config();
                assert_eq!(config.model, "tiiuae/falcon-7b-instruct");
                assert_eq!(config.timeout, Duration::from_secs(5));
            }
            _ => panic!("expected serve"),
        }
    }
}
