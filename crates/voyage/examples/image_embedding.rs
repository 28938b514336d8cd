use voyage::{voyage, EmbeddingModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Image-only mode: every value must be an image URL or data URI.
    let model = voyage().image_embedding_model("voyage-multimodal-3");
    let result = model
        .embed(
            vec![
                "https://raw.githubusercontent.com/voyage-ai/voyage-multimodal-3/refs/heads/main/images/banana.jpg".to_string(),
            ],
            None,
        )
        .await?;

    println!("{} embeddings returned", result.embeddings.len());
    Ok(())
}
