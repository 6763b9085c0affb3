//! Tree-ensemble classifier loaded from a JSON artifact.
//!
//! The artifact is produced by the training pipeline. Node 0 of each tree is
//! the root; a split sends the sample left when `x[feature] <= threshold`.
//! Every tree votes one class and the majority wins, ties going to the
//! smallest class code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::{ModelError, Predictor};
use crate::encoding::{FeatureVector, FEATURE_COUNT, TABLE_VERSION};

pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout of a model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub format_version: u32,
    /// Category table set the model was trained against.
    pub table_version: String,
    pub n_features: usize,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

impl Tree {
    fn validate(&self, index: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid(format!("tree {index} has no nodes")));
        }
        let len = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(ModelError::Invalid(format!(
                        "tree {index} node {i}: feature {feature} out of range"
                    )));
                }
                if !threshold.is_finite() {
                    return Err(ModelError::Invalid(format!(
                        "tree {index} node {i}: threshold is not finite"
                    )));
                }
                // Children strictly after their parent keeps the tree acyclic.
                for child in [*left, *right] {
                    if child <= i || child >= len {
                        return Err(ModelError::Invalid(format!(
                            "tree {index} node {i}: child {child} out of range"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn classify(&self, x: &[f64; FEATURE_COUNT]) -> i64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Validated tree ensemble, safe to share across requests.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    name: String,
    trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Read, parse and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ForestArtifact = serde_json::from_str(&raw)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "forest".to_string());
        let ensemble = Self::from_artifact(name, artifact)?;
        info!(
            "Loaded tree ensemble '{}' ({} trees)",
            ensemble.name,
            ensemble.tree_count()
        );
        Ok(ensemble)
    }

    pub fn from_artifact(
        name: impl Into<String>,
        artifact: ForestArtifact,
    ) -> Result<Self, ModelError> {
        if artifact.format_version != FORMAT_VERSION {
            return Err(ModelError::Invalid(format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                artifact.format_version
            )));
        }
        if artifact.table_version != TABLE_VERSION {
            return Err(ModelError::TableMismatch {
                expected: TABLE_VERSION.to_string(),
                found: artifact.table_version,
            });
        }
        if artifact.n_features != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "model expects {} features, encoder produces {FEATURE_COUNT}",
                artifact.n_features
            )));
        }
        if artifact.trees.is_empty() {
            return Err(ModelError::Invalid("artifact contains no trees".into()));
        }
        for (i, tree) in artifact.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(TreeEnsemble {
            name: name.into(),
            trees: artifact.trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for TreeEnsemble {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let x = features.as_f64();
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.classify(&x)).or_default() += 1;
        }

        // Ascending iteration + strict `>` resolves ties to the smallest class.
        let mut best: Option<(i64, usize)> = None;
        for (class, count) in votes {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((class, count));
            }
        }
        best.map(|(class, _)| class)
            .ok_or_else(|| ModelError::Inference("ensemble produced no votes".into()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
