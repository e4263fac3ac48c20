use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use interview_gate::classifiers::pipeline::ClassificationPipeline;
use interview_gate::config::{init_tracing, GateConfig};
use interview_gate::server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GateConfig::parse();
    init_tracing();

    info!(
        domain_model = %config.domain_model,
        intent_model = %config.intent_model,
        "starting interview-gate"
    );

    let state = AppState::new();

    // Bind first so /health is reachable while the models load.
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "listening");

    let load_state = state.clone();
    let load_config = config.clone();
    tokio::task::spawn_blocking(move || {
        match ClassificationPipeline::load(
            &load_config.domain_model,
            &load_config.intent_model,
            load_config.cpu,
        ) {
            Ok(pipeline) => {
                load_state.install_pipeline(pipeline);
                info!("both classifiers loaded, gate is ready");
            }
            Err(e) => {
                // The service stays up in a degraded state: /health keeps
                // reporting models_loaded=false and /classify answers 503.
                error!(error = %e, "failed to load classifiers");
            }
        }
    });

    let router = build_router(state);
    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
