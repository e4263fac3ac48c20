//! # HTTP serving layer

pub mod error;
pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::{Arc, OnceLock};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::classifiers::pipeline::ClassificationPipeline;

/// Shared application state
///
/// The pipeline slot starts empty so the listener can come up while the
/// models load on a blocking task; `/health` reflects the slot state and
/// `/classify` answers 503 until it is filled.
#[derive(Clone, Default)]
pub struct AppState {
    pipeline: Arc<OnceLock<Arc<ClassificationPipeline>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded pipeline; returns false if one was already set
    pub fn install_pipeline(&self, pipeline: ClassificationPipeline) -> bool {
        self.pipeline.set(Arc::new(pipeline)).is_ok()
    }

    pub fn pipeline(&self) -> Option<Arc<ClassificationPipeline>> {
        self.pipeline.get().cloned()
    }

    pub fn models_loaded(&self) -> bool {
        self.pipeline.get().is_some()
    }
}

/// Build the service router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(handlers::classify))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub mod handlers_test;
