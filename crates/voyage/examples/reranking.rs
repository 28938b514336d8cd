use serde_json::json;
use voyage::{voyage, RerankDocuments, RerankingModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let model = voyage().reranking_model("rerank-2.5");
    let result = model
        .rerank(
            "talk about rain",
            RerankDocuments::Text(vec![
                "sunny day at the beach".to_string(),
                "rainy day in the city".to_string(),
            ]),
            Some(1),
            Some(&json!({ "returnDocuments": false, "truncation": true })),
        )
        .await?;

    for entry in result.ranking {
        println!("document {}: score {:.4}", entry.index, entry.relevance_score);
    }
    println!("tokens used: {}", result.usage.tokens);
    Ok(())
}
