//! Gemini Bridge demo driver
//!
//! Runs the adapter layer end to end against the live API: loads credentials,
//! bootstraps the orchestrator's working directory, embeds one sample passage
//! the way an ingestion pass would, then answers one query. Pass
//! `--list-models` to print the model catalog instead.

use gemini_bridge::{
    completion::{CompletionAdapter, CompletionProvider, CompletionRequest, ConversationTurn},
    config::Config,
    embedding::EmbeddingAdapter,
    gemini::GeminiClient,
    observability::init_observability,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up GOOGLE_API_KEY from a local .env if present
    dotenvy::dotenv().ok();

    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => Config::from_file_with_env(path)?,
        Err(_) => Config::default_config(),
    };
    config.validate()?;

    init_observability(&config.logging.level, &config.logging.format);
    info!("Starting Gemini bridge driver");

    let client = Arc::new(GeminiClient::new(&config.gemini)?);

    if std::env::args().any(|arg| arg == "--list-models") {
        let listing = client.list_models().await?;
        for model in listing.models {
            println!("{}  {}", model.name, model.display_name.unwrap_or_default());
            if let Some(methods) = model.supported_generation_methods {
                println!("    methods: {}", methods.join(", "));
            }
        }
        return Ok(());
    }

    // The orchestrator's storage directory must exist before it initializes
    let working_dir = config.workspace.ensure()?;
    info!("Working directory ready at {}", working_dir.display());

    let completion = CompletionAdapter::new(client.clone(), config.completion.clone());
    let embedding = EmbeddingAdapter::new(client, config.embedding.clone());

    // Ingestion shape: embed one document passage
    let document = "Patrick is very good with Python and finished every exercise early.";
    let rows = embedding.embed(document).await?;
    info!(
        rows = rows.len(),
        dimension = rows.first().map_or(0, Vec::len),
        "Document embedded"
    );

    // Retrieval shape: embed the query, then ask the model with the
    // document supplied as context
    let query = "What is Patrick good at?";
    let query_rows = embedding.embed(query).await?;
    info!(rows = query_rows.len(), "Query embedded");

    let request = CompletionRequest::new(query)
        .with_system_prompt("Answer briefly, using only the provided context.")
        .with_history(vec![ConversationTurn::user(document).into()]);

    let answer = completion.complete(request).await?;
    println!("Query:  {query}");
    println!("Answer: {answer}");

    Ok(())
}
