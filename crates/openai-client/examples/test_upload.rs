//! Upload a local file to OpenAI storage and print its id.
//!
//! Run with: cargo run -p openai-client --example test_upload -- path/to/drawing.pdf
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use openai_client::{FilePurpose, FileStore, OpenAiClient};
use std::env;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let Some(path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: test_upload <file>");
        std::process::exit(2);
    };

    let client = OpenAiClient::from_env()?;
    let stored = client.upload_file(&path, FilePurpose::UserData).await?;

    println!("File ID: {}", stored.id);
    println!("Size: {} bytes", stored.bytes);

    Ok(())
}
