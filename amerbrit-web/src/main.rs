mod config;
mod routes;

use amerbrit::{Dictionaries, Translator, load_dictionaries_from_dir};
use std::sync::Arc;
use tracing::info;

use config::ServerConfig;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();

    // Load dictionaries and compile the translator once for the whole process
    let dictionaries = match &config.dictionary_dir {
        Some(dir) => {
            info!("Loading dictionaries from {}", dir.display());
            load_dictionaries_from_dir(dir)?
        }
        None => Dictionaries::builtin()?,
    };
    let translator = Translator::new(&dictionaries)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    info!(rules = dictionaries.rule_count(), "Translator ready");

    let state = AppState {
        translator: Arc::new(translator),
    };
    let app = routes::router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running at http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
