//! Opaque match-winner classifiers.
//!
//! Everything downstream of encoding talks to a [`Predictor`]; how the model
//! was trained or stored stays behind that trait.

pub mod forest;

pub use forest::TreeEnsemble;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::encoding::FeatureVector;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),

    #[error("model was trained against category tables {found}, this build embeds {expected}")]
    TableMismatch { expected: String, found: String },

    #[error("inference failed: {0}")]
    Inference(String),
}

/// A trained classifier: one feature vector in, one class code out.
pub trait Predictor {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Predictor handle shared read-only by every request.
pub type SharedPredictor = Arc<dyn Predictor + Send + Sync>;

/// Serializes access to a predictor that cannot be invoked concurrently.
pub struct Locked<P> {
    inner: Mutex<P>,
    name: String,
}

impl<P: Predictor> Locked<P> {
    pub fn new(predictor: P) -> Self {
        let name = format!("locked({})", predictor.name());
        Locked {
            inner: Mutex::new(predictor),
            name,
        }
    }
}

impl<P: Predictor> Predictor for Locked<P> {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| ModelError::Inference("predictor lock poisoned".into()))?;
        guard.predict(features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Load the model artifact at `path`.
pub fn load_predictor(path: &Path) -> Result<SharedPredictor, ModelError> {
    let ensemble = TreeEnsemble::load(path)?;
    Ok(Arc::new(ensemble))
}
