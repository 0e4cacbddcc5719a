//! Serve command - run the HTTP service.

use colored::Colorize;
use tracing::warn;

use crate::cli::ModelArgs;
use crate::server::{app, state::AppState};

pub fn run(host: String, port: u16, model: ModelArgs) -> Result<(), Box<dyn std::error::Error>> {
    let processor = model.build_processor()?;
    let state = AppState::new(processor);

    let addr = format!("{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Starting refinery at".cyan().bold(),
        format!("http://{}", addr).white().bold()
    );
    println!();
    println!("  Endpoint: POST /clean_enrich");
    println!("  Model: {}", model.hf_model);
    if state.generative_available() {
        println!("  Generative mode: {}", "enabled".green());
    } else {
        println!(
            "  Generative mode: {} (set HUGGINGFACE_API_KEY)",
            "disabled".yellow()
        );
        warn!("no Hugging Face credential configured, generative batches will be rejected");
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &addr))?;

    Ok(())
}
