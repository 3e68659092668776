//! Simple test for OpenAiClient chat completion.
//!
//! Run with: cargo run -p openai-client --example test_chat
//! Or with a custom message: cargo run -p openai-client --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use openai_client::{CompletionClient, Message, OpenAiClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Responda apenas com uma saudação curta.".to_string()
    };

    println!("Initializing OpenAiClient...");
    let client = OpenAiClient::from_env()?;

    println!("API URL: {}", client.config().api_url);
    println!("Model: {}", client.model());
    println!();

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let completion = client
        .create_completion(&[Message::user(message_text)])
        .await?;

    println!("=== Response ===");
    println!("{}", completion.first_content().unwrap_or("(no content)"));
    println!("================");

    Ok(())
}
