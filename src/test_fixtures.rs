//! Shared test fixtures
//!
//! Model-backed tests load each classifier at most once through a global
//! cache and receive `Option<Arc<...>>` so suites skip gracefully on machines
//! without the model artifacts.

#[cfg(test)]
pub mod fixtures {
    use crate::classifiers::pipeline::ClassificationPipeline;
    use rstest::*;
    use std::path::Path;
    use std::sync::{Arc, Mutex, OnceLock};

    /// Model artifact locations, relative to the crate root
    pub const MODELS_BASE_PATH: &str = "models";
    pub const DOMAIN_MODEL: &str = "domain_classifier_modernbert-base_model";
    pub const INTENT_MODEL: &str = "intent_classifier_modernbert-base_model";

    pub fn domain_model_path() -> String {
        format!("{}/{}", MODELS_BASE_PATH, DOMAIN_MODEL)
    }

    pub fn intent_model_path() -> String {
        format!("{}/{}", MODELS_BASE_PATH, INTENT_MODEL)
    }

    /// Cache of loaded models shared across tests
    pub struct ModelCache {
        pub pipeline: Option<Arc<ClassificationPipeline>>,
    }

    impl ModelCache {
        fn load() -> Self {
            let domain = domain_model_path();
            let intent = intent_model_path();

            if !Path::new(&domain).is_dir() || !Path::new(&intent).is_dir() {
                println!("Model artifacts not found, model-backed tests will be skipped");
                return Self { pipeline: None };
            }

            let pipeline = match ClassificationPipeline::load(&domain, &intent, true) {
                Ok(p) => Some(Arc::new(p)),
                Err(e) => {
                    println!("Failed to load pipeline for tests: {}", e);
                    None
                }
            };

            Self { pipeline }
        }
    }

    fn global_model_cache() -> &'static Mutex<ModelCache> {
        static CACHE: OnceLock<Mutex<ModelCache>> = OnceLock::new();
        CACHE.get_or_init(|| Mutex::new(ModelCache::load()))
    }

    /// Cached classification pipeline, `None` when artifacts are missing
    #[fixture]
    pub fn cached_pipeline() -> Option<Arc<ClassificationPipeline>> {
        global_model_cache()
            .lock()
            .ok()
            .and_then(|cache| cache.pipeline.clone())
    }
}

#[cfg(test)]
pub mod test_utils {
    /// Messages a finance-domain model should accept
    pub fn finance_texts() -> Vec<&'static str> {
        vec![
            "The company's debt-to-equity ratio rose to 1.8 after the bond issuance.",
            "I would discount the free cash flows at the weighted average cost of capital.",
            "Could you clarify whether the portfolio return is annualized or cumulative?",
            "EBITDA margin expanded by 200 basis points year over year.",
        ]
    }

    /// Messages a finance-domain model should reject
    pub fn non_finance_texts() -> Vec<&'static str> {
        vec![
            "What's your favorite pizza topping?",
            "The weather in Berlin has been great this week.",
            "My cat knocked the keyboard off the desk again.",
        ]
    }
}
