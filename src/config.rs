use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// IPL match winner prediction service
#[derive(Parser, Debug, Clone)]
#[command(name = "ipl-predictor", version, about)]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5000")]
    pub listen_addr: String,

    /// Path to the serialized model artifact
    #[arg(long, env = "MODEL_PATH", default_value = "ipl_model.json")]
    pub model_path: PathBuf,

    /// Abort startup if the model cannot be loaded instead of serving
    /// "model unavailable" errors
    #[arg(long, env = "REQUIRE_MODEL", default_value = "false")]
    pub require_model: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("listen_addr '{}' is not a valid socket address", self.listen_addr);
        }
        if self.model_path.as_os_str().is_empty() {
            anyhow::bail!("model_path must not be empty");
        }
        Ok(())
    }
}
