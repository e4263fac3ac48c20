use serde::Deserialize;

/// Body of `POST /classify`
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Free-text user message to classify
    pub message: String,
}
