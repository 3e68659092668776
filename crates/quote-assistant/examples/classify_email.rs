//! Classify an email as a production quote request or not.
//!
//! Run with: cargo run -p quote-assistant --example classify_email -- "Subject" "Body"
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use quote_assistant::{EmailClassification, QuoteAssistant};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let subject = args.get(1).cloned().unwrap_or_else(|| "Orçamento peça X".to_string());
    let body = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "Preciso de 50 unidades em aço".to_string());

    let assistant = QuoteAssistant::from_env()?;
    let reply = assistant.classify_email(&subject, &body).await?;

    println!("=== Raw reply ===");
    println!("{}", reply);

    if let Ok(classification) = EmailClassification::parse(&reply) {
        println!("=== Parsed ===");
        println!("{:#?}", classification);
    }

    Ok(())
}
