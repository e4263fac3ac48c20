//! Service configuration
//!
//! All settings come from the command line or environment; there is no config
//! file. Model references may be local directories or HuggingFace Hub ids.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two-stage domain and intent classification gate
#[derive(Debug, Clone, Parser)]
#[command(name = "interview-gate", version, about)]
pub struct GateConfig {
    /// Layer 1 (finance / non_finance) model directory or Hub id
    #[arg(long, env = "GATE_DOMAIN_MODEL")]
    pub domain_model: String,

    /// Layer 2 (six-way intent) model directory or Hub id
    #[arg(long, env = "GATE_INTENT_MODEL")]
    pub intent_model: String,

    /// Address to bind
    #[arg(long, env = "GATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "GATE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Force CPU inference even when CUDA is available
    #[arg(long, env = "GATE_CPU")]
    pub cpu: bool,
}

impl GateConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Initialize structured logging, honoring `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
