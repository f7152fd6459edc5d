//! Terminal front end: generate a structured VEO prompt from a scene
//! description and print it as JSON.
//!
//! The scene description comes from the command line arguments, or from
//! stdin when no arguments are given.

use std::io::Read;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veoprompt_core::{translations, PromptSession, SessionConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("veoprompt=info".parse().expect("valid directive"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let config = SessionConfig::from_env();
    let language = config.language;
    let t = translations(language);

    let session = match PromptSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    // Fall back to the environment when no credential file exists yet
    if !session.is_initialized() {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                if let Err(e) = session.set_credential(&key) {
                    error!("Failed to store credential: {}", e);
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("{}", t.error_not_initialized);
                std::process::exit(2);
            }
        }
    }

    let description = read_description();
    if description.trim().is_empty() {
        eprintln!("{}", t.describe_scene);
        std::process::exit(2);
    }

    info!("Generating prompt");
    match session.generate(&description).await {
        Ok(()) => println!("{}", session.document_text()),
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("{}", e.localized_message(language));
            std::process::exit(1);
        }
    }
}

fn read_description() -> String {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return args.join(" ");
    }
    let mut buffer = String::new();
    if std::io::stdin().read_to_string(&mut buffer).is_err() {
        return String::new();
    }
    buffer
}
