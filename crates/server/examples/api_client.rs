//! Examples for using the LexiGauge Server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Readiness (reports the embedding backend)
    println!("2. Readiness:");
    let resp = client.get(format!("{SERVER_URL}/ready")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Analyze a clear, single-sense word
    println!("3. Analyze 'file':");
    let resp = client
        .post(format!("{SERVER_URL}/analyze"))
        .json(&json!({ "word": "file" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Analyze a famously ambiguous word
    println!("4. Analyze 'bank':");
    let resp = client
        .post(format!("{SERVER_URL}/analyze"))
        .json(&json!({ "word": "bank" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Invalid input (empty word) returns a structured error
    println!("5. Analyze empty word:");
    let resp = client
        .post(format!("{SERVER_URL}/analyze"))
        .json(&json!({ "word": "" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
