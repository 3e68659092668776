//! Upload a technical drawing and run the four-step analysis.
//!
//! Run with: cargo run -p quote-assistant --example analyze_drawing -- desenho.pdf 10
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use quote_assistant::QuoteAssistant;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: analyze_drawing <file> [quantity]");
        std::process::exit(2);
    }
    let quantity: u32 = args.get(2).and_then(|q| q.parse().ok()).unwrap_or(1);

    let assistant = QuoteAssistant::from_env()?;

    let file_id = assistant.file_upload(&args[1]).await?;
    println!("Uploaded as {}", file_id);

    let analysis = assistant.analyze_drawing(&file_id, quantity).await?;

    println!("=== Dimensions ===");
    println!("{}", analysis.dimensions);
    println!("=== Processes ===");
    println!("{}", analysis.processes);
    println!("=== Time ===");
    println!("{}", analysis.time_estimate);
    println!("=== Summary ===");
    match analysis.parse_summary() {
        Ok(summary) => println!("{:#?}\nTotal hours: {}", summary, summary.total_hours()),
        Err(e) => println!("{}\n(could not parse: {})", analysis.summary, e),
    }

    Ok(())
}
