use serde_json::json;
use voyage::{voyage, EmbeddingModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let model = voyage().text_embedding_model("voyage-3-lite");
    let result = model
        .embed(
            vec![
                "sunny day at the beach".to_string(),
                "rainy day in the city".to_string(),
            ],
            Some(&json!({ "inputType": "document" })),
        )
        .await?;

    for (i, embedding) in result.embeddings.iter().enumerate() {
        println!("value {i}: {} dimensions", embedding.len());
    }
    if let Some(usage) = result.usage {
        println!("tokens used: {}", usage.tokens);
    }
    Ok(())
}
