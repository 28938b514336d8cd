use serde_json::json;
use voyage::{voyage, EmbeddingModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let model = voyage().multimodal_embedding_model("voyage-multimodal-3");

    // Each value is one embedding unit; mixed text and image content is
    // supplied as a serialized structure.
    let values = vec![
        "sunny day at the beach".to_string(),
        json!({
            "text": ["a photo of the product"],
            "image": ["https://raw.githubusercontent.com/voyage-ai/voyage-multimodal-3/refs/heads/main/images/banana.jpg"],
        })
        .to_string(),
    ];

    let result = model.embed(values, None).await?;
    println!("{} embeddings returned", result.embeddings.len());
    if let Some(usage) = result.usage {
        println!("tokens used: {}", usage.tokens);
    }
    Ok(())
}
