//! Print the current top headlines
//!
//! Run with: NEWSAPI_KEY=... cargo run --example headlines

use std::sync::Arc;
use tazza_khabar::{FeedConfig, HeadlinesClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = FeedConfig::from_env()?;
    println!("Fetching top headlines for '{}'...", config.country);

    let client = HeadlinesClient::new(Arc::new(config))?;
    let articles = client.fetch_headlines().await?;
    println!("Got {} articles:\n", articles.len());

    for article in &articles {
        let source = article.source.as_deref().unwrap_or("unknown source");
        println!("  [{}] {} ({})", article.id, article.title, source);
        if let Some(published) = article.published_at {
            println!("        {}", published.format("%Y-%m-%d %H:%M UTC"));
        }
    }

    Ok(())
}
