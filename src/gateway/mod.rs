//! Prediction gateway: raw form fields in, predicted winner out.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::encoding::{decode, encode, Dimension, FeatureVector, FEATURE_COUNT, SENTINEL};
use crate::model::{Predictor, SharedPredictor};

/// Request fields in feature-vector order, with the table each is encoded by.
pub const FIELDS: [(&str, Dimension); FEATURE_COUNT] = [
    ("team1", Dimension::Team),
    ("team2", Dimension::Team),
    ("venue", Dimension::Venue),
    ("city", Dimension::City),
    ("toss_winner", Dimension::Team),
    ("toss_decision", Dimension::TossDecision),
];

#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("Model not loaded. Check logs.")]
    ModelUnavailable,

    #[error("Invalid input values. Check {}.", .fields.join(", "))]
    InvalidInput { fields: Vec<&'static str> },

    #[error("Unexpected prediction output: class {0} has no matching team.")]
    UnmappablePrediction(i64),

    #[error("{0}")]
    Unexpected(String),
}

/// A resolved prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub winner: &'static str,
    pub class: i64,
    pub features: FeatureVector,
}

/// Owns the loaded predictor, if any. Cheap to clone.
#[derive(Clone)]
pub struct PredictionGateway {
    predictor: Option<SharedPredictor>,
}

impl PredictionGateway {
    pub fn new(predictor: SharedPredictor) -> Self {
        PredictionGateway {
            predictor: Some(predictor),
        }
    }

    /// A gateway whose model failed to load; every request is refused.
    pub fn unavailable() -> Self {
        PredictionGateway { predictor: None }
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.predictor.as_deref().map(|p| p.name())
    }

    /// Predict the winner for one request's raw fields.
    pub fn predict(
        &self,
        fields: &HashMap<String, String>,
    ) -> Result<Prediction, PredictionError> {
        let Some(predictor) = self.predictor.as_deref() else {
            return Err(PredictionError::ModelUnavailable);
        };

        let features = encode_fields(fields)?;
        debug!("Mapped features: {}", features);

        let class = predictor
            .predict(&features)
            .map_err(|e| PredictionError::Unexpected(e.to_string()))?;

        match decode(Dimension::Team, class) {
            Some(winner) => Ok(Prediction {
                winner,
                class,
                features,
            }),
            None => {
                warn!(
                    "Predictor '{}' returned class {} outside the team table",
                    predictor.name(),
                    class
                );
                Err(PredictionError::UnmappablePrediction(class))
            }
        }
    }
}

/// Encode the six request fields. Missing fields count as unrecognized; every
/// invalid field is reported.
pub fn encode_fields(
    fields: &HashMap<String, String>,
) -> Result<FeatureVector, PredictionError> {
    let mut codes = [SENTINEL; FEATURE_COUNT];
    let mut invalid = Vec::new();
    for (slot, (name, dimension)) in codes.iter_mut().zip(FIELDS) {
        *slot = encode(dimension, fields.get(name).map(String::as_str));
        if *slot == SENTINEL {
            invalid.push(name);
        }
    }

    if !invalid.is_empty() {
        warn!("Rejected prediction request, invalid fields: {:?}", invalid);
        return Err(PredictionError::InvalidInput { fields: invalid });
    }
    FeatureVector::new(codes).ok_or_else(|| {
        PredictionError::Unexpected("encoder produced a negative code".to_string())
    })
}
