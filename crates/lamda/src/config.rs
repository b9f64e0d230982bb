use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::lamda::{Criterion, DEFAULT_RHO_MARGIN};
use crate::operators::reducers::{self, Reducer};

/// Named reducers available to configured operators.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReducerKind {
    Minimum,
    Product,
    Lukasiewicz,
    Maximum,
    ProbabilisticSum,
    BoundedSum,
}

impl ReducerKind {
    pub fn reducer(self) -> Reducer {
        match self {
            ReducerKind::Minimum => reducers::minimum,
            ReducerKind::Product => reducers::product,
            ReducerKind::Lukasiewicz => reducers::lukasiewicz,
            ReducerKind::Maximum => reducers::maximum,
            ReducerKind::ProbabilisticSum => reducers::probabilistic_sum,
            ReducerKind::BoundedSum => reducers::bounded_sum,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReducerKind::Minimum => "minimum",
            ReducerKind::Product => "product",
            ReducerKind::Lukasiewicz => "lukasiewicz",
            ReducerKind::Maximum => "maximum",
            ReducerKind::ProbabilisticSum => "probabilistic_sum",
            ReducerKind::BoundedSum => "bounded_sum",
        }
    }
}

impl FromStr for ReducerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(ReducerKind::Minimum),
            "prod" | "product" => Ok(ReducerKind::Product),
            "luk" | "lukasiewicz" => Ok(ReducerKind::Lukasiewicz),
            "max" | "maximum" => Ok(ReducerKind::Maximum),
            "psum" | "probabilistic_sum" => Ok(ReducerKind::ProbabilisticSum),
            "bounded_sum" => Ok(ReducerKind::BoundedSum),
            _ => Err(format!("Unknown reducer: {}", s)),
        }
    }
}

/// Supported aggregation operators and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperatorConfig {
    TNorm {
        reducer: ReducerKind,
    },
    Compensatory {
        tnorm: ReducerKind,
        tconorm: ReducerKind,
        alpha: f64,
    },
    TripleProduct,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        OperatorConfig::TNorm {
            reducer: ReducerKind::Minimum,
        }
    }
}

impl FromStr for OperatorConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "triple_product" | "triple" => Ok(OperatorConfig::TripleProduct),
            "compensatory" => Ok(OperatorConfig::Compensatory {
                tnorm: ReducerKind::Minimum,
                tconorm: ReducerKind::Maximum,
                alpha: 0.9,
            }),
            other => other
                .parse::<ReducerKind>()
                .map(|reducer| OperatorConfig::TNorm { reducer })
                .map_err(|_| format!("Unknown aggregation operator: {}", s)),
        }
    }
}

/// Central configuration for a LAMDA classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LamdaConfig {
    pub operator: OperatorConfig,
    /// Number of descriptors, if known before learning.
    pub descriptors: Option<usize>,
    /// Learned rho values are clamped to `[rho_margin, 1 - rho_margin]`.
    /// Must lie strictly inside (0, 0.5).
    pub rho_margin: f64,
    /// Criterion the built model uses when predicting through `ClassifierModel`.
    pub criterion: Criterion,
}

impl Default for LamdaConfig {
    fn default() -> Self {
        Self {
            operator: OperatorConfig::default(),
            descriptors: None,
            rho_margin: DEFAULT_RHO_MARGIN,
            criterion: Criterion::Max,
        }
    }
}

impl LamdaConfig {
    pub fn new(operator: OperatorConfig) -> Self {
        Self {
            operator,
            ..Self::default()
        }
    }
}

/// Load a classifier configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LamdaConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: LamdaConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!("Loaded LAMDA config from {}: {:?}", path.as_ref().display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_short_names_parse() {
        assert_eq!(
            "min".parse::<OperatorConfig>().unwrap(),
            OperatorConfig::TNorm {
                reducer: ReducerKind::Minimum
            }
        );
        assert_eq!(
            "PROD".parse::<OperatorConfig>().unwrap(),
            OperatorConfig::TNorm {
                reducer: ReducerKind::Product
            }
        );
        assert_eq!(
            "triple_product".parse::<OperatorConfig>().unwrap(),
            OperatorConfig::TripleProduct
        );
        assert!(matches!(
            "compensatory".parse::<OperatorConfig>().unwrap(),
            OperatorConfig::Compensatory { alpha, .. } if alpha == 0.9
        ));
        assert!("median".parse::<OperatorConfig>().is_err());
    }

    #[test]
    fn operator_config_json_is_tagged() {
        let json = serde_json::to_string(&OperatorConfig::TripleProduct).unwrap();
        assert_eq!(json, r#"{"kind":"triple_product"}"#);

        let parsed: OperatorConfig = serde_json::from_str(
            r#"{"kind":"compensatory","tnorm":"product","tconorm":"probabilistic_sum","alpha":0.3}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            OperatorConfig::Compensatory {
                tnorm: ReducerKind::Product,
                tconorm: ReducerKind::ProbabilisticSum,
                alpha: 0.3,
            }
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: LamdaConfig = serde_json::from_str(r#"{"descriptors": 4}"#).unwrap();
        assert_eq!(cfg.descriptors, Some(4));
        assert_eq!(cfg.operator, OperatorConfig::default());
        assert_eq!(cfg.rho_margin, DEFAULT_RHO_MARGIN);
        assert_eq!(cfg.criterion, Criterion::Max);
    }
}
