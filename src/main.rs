//! Portal Guide server binary.
//!
//! Loads configuration, validates the decision graph (a dangling node
//! reference refuses to boot), and serves the questionnaire API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use portal_guide::adapters::http::{guide_router, GuideAppState};
use portal_guide::adapters::storage::{InMemorySessionStore, LocalModuleStore};
use portal_guide::config::AppConfig;
use portal_guide::domain::graph::{captive_portal_graph, DecisionGraph};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Graph integrity is a startup concern: a dangling reference here is a
    // data fault, not something traversal should recover from.
    let graph = match &config.storage.graph_file {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path).await?;
            let graph = DecisionGraph::from_yaml(&yaml)?;
            tracing::info!(graph_file = %path.display(), "loaded decision graph");
            graph
        }
        None => {
            let graph = captive_portal_graph();
            graph.validate()?;
            graph
        }
    };

    let state = GuideAppState::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(LocalModuleStore::new(config.storage.modules_dir.clone())),
        Arc::new(graph),
    );

    let cors = build_cors(&config.server.cors_origins_list())?;
    let app = guide_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "portal guide listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(origins: &[String]) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
