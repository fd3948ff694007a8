use std::{env, process};

use anyhow::Context;
use serde_json::Value;
use tracing::info;

use quiz_relay::{
    config::AppConfig,
    tool::{PostRequest, Tool},
    utils::logging::setup_logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: quiz-relay <config_path> <url> <payload_json> [headers_json]");
        process::exit(1);
    }

    let config = AppConfig::from_file(&args[1])?;
    let _guard = setup_logging("logs", "quiz-relay", config.debug);

    let mut call = serde_json::json!({
        "url": &args[2],
        "payload": serde_json::from_str::<Value>(&args[3]).context("payload must be valid JSON")?,
    });
    if let Some(raw) = args.get(4) {
        call["headers"] =
            serde_json::from_str(raw).context("headers must be a JSON object of strings")?;
    }

    let tool = PostRequest::new(&config)?;
    info!("🚀 Invoking {} against {}", tool.name(), args[2]);

    let outcome = tool.execute(call).await?;

    // The outcome is for the calling agent; errors are values in it, so a
    // server-side failure still exits 0.
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
