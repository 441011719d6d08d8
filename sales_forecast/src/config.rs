//! Tunable forecasting policy
//!
//! Every activation threshold, blend weight and confidence rule lives here.
//! The defaults reproduce the dashboards' historical behavior; the weights
//! were chosen empirically and can be retuned without touching the engine.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Recorded days needed before the moving average activates
pub const MOVING_AVERAGE_MIN_DAYS: usize = 7;
/// Number of most recent recorded days averaged by the moving average
pub const MOVING_AVERAGE_WINDOW: usize = 7;
/// Recorded days needed before the regression activates
pub const REGRESSION_MIN_DAYS: usize = 3;
/// Recorded days needed before the weighted average activates
pub const WEIGHTED_MIN_DAYS: usize = 3;
/// Recorded days needed for the four-method blend
pub const FULL_BLEND_MIN_DAYS: usize = 7;
/// Recorded days needed for the three-method blend
pub const SHORT_BLEND_MIN_DAYS: usize = 3;
/// Fraction of the expected pace still counted as "on pace"
pub const PACE_TOLERANCE: f64 = 0.7;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights for the blend used once every method is active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullBlendWeights {
    pub regression: f64,
    pub moving_average: f64,
    pub weighted: f64,
    pub simple: f64,
}

impl Default for FullBlendWeights {
    fn default() -> Self {
        Self {
            regression: 0.4,
            moving_average: 0.3,
            weighted: 0.2,
            simple: 0.1,
        }
    }
}

impl FullBlendWeights {
    fn as_array(&self) -> [f64; 4] {
        [self.regression, self.moving_average, self.weighted, self.simple]
    }
}

/// Weights for the blend used before the moving average activates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortBlendWeights {
    pub regression: f64,
    pub weighted: f64,
    pub simple: f64,
}

impl Default for ShortBlendWeights {
    fn default() -> Self {
        Self {
            regression: 0.5,
            weighted: 0.3,
            simple: 0.2,
        }
    }
}

impl ShortBlendWeights {
    fn as_array(&self) -> [f64; 3] {
        [self.regression, self.weighted, self.simple]
    }
}

/// Base confidence granted once a series has at least `min_days` recorded days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceTier {
    pub min_days: usize,
    pub score: u8,
}

/// Rules for the heuristic 0-100 confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidencePolicy {
    /// Score for series shorter than the first tier
    pub base: u8,
    /// Ascending by `min_days`; the last tier reached wins
    pub tiers: Vec<ConfidenceTier>,
    /// Recorded days needed before volatility adjusts the score
    pub variation_min_days: usize,
    /// Coefficient of variation below which the bonus applies
    pub low_variation: f64,
    /// Coefficient of variation above which the penalty applies
    pub high_variation: f64,
    pub variation_bonus: u8,
    pub variation_penalty: u8,
    pub min: u8,
    pub max: u8,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            base: 50,
            tiers: vec![
                ConfidenceTier { min_days: 3, score: 55 },
                ConfidenceTier { min_days: 7, score: 65 },
                ConfidenceTier { min_days: 10, score: 75 },
                ConfidenceTier { min_days: 15, score: 85 },
            ],
            variation_min_days: 3,
            low_variation: 0.2,
            high_variation: 0.5,
            variation_bonus: 10,
            variation_penalty: 10,
            min: 30,
            max: 95,
        }
    }
}

impl ConfidencePolicy {
    /// Base score for a series with `recorded_days` entries
    pub fn base_score(&self, recorded_days: usize) -> u8 {
        self.tiers
            .iter()
            .take_while(|tier| recorded_days >= tier.min_days)
            .last()
            .map_or(self.base, |tier| tier.score)
    }
}

/// Complete forecasting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub moving_average_window: usize,
    pub moving_average_min_days: usize,
    pub regression_min_days: usize,
    pub weighted_min_days: usize,
    pub full_blend_min_days: usize,
    pub short_blend_min_days: usize,
    pub full_blend: FullBlendWeights,
    pub short_blend: ShortBlendWeights,
    pub confidence: ConfidencePolicy,
    pub pace_tolerance: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            moving_average_window: MOVING_AVERAGE_WINDOW,
            moving_average_min_days: MOVING_AVERAGE_MIN_DAYS,
            regression_min_days: REGRESSION_MIN_DAYS,
            weighted_min_days: WEIGHTED_MIN_DAYS,
            full_blend_min_days: FULL_BLEND_MIN_DAYS,
            short_blend_min_days: SHORT_BLEND_MIN_DAYS,
            full_blend: FullBlendWeights::default(),
            short_blend: ShortBlendWeights::default(),
            confidence: ConfidencePolicy::default(),
            pace_tolerance: PACE_TOLERANCE,
        }
    }
}

impl ForecastConfig {
    /// Parse and validate a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "rejected forecast configuration");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.moving_average_window == 0 {
            return Err(ForecastError::Config(
                "moving_average_window must be greater than zero".to_string(),
            ));
        }
        if self.regression_min_days < 2 {
            return Err(ForecastError::Config(
                "regression_min_days must be at least 2".to_string(),
            ));
        }
        if self.short_blend_min_days > self.full_blend_min_days {
            return Err(ForecastError::Config(format!(
                "short_blend_min_days ({}) exceeds full_blend_min_days ({})",
                self.short_blend_min_days, self.full_blend_min_days
            )));
        }
        if self.full_blend_min_days < self.moving_average_min_days {
            return Err(ForecastError::Config(format!(
                "full_blend_min_days ({}) is below moving_average_min_days ({})",
                self.full_blend_min_days, self.moving_average_min_days
            )));
        }

        check_weights("full_blend", &self.full_blend.as_array())?;
        check_weights("short_blend", &self.short_blend.as_array())?;

        let confidence = &self.confidence;
        if confidence.min > confidence.max || confidence.max > 100 {
            return Err(ForecastError::Config(format!(
                "confidence bounds [{}, {}] must satisfy min <= max <= 100",
                confidence.min, confidence.max
            )));
        }
        if confidence
            .tiers
            .windows(2)
            .any(|pair| pair[0].min_days >= pair[1].min_days)
        {
            return Err(ForecastError::Config(
                "confidence tiers must be strictly ascending by min_days".to_string(),
            ));
        }
        if confidence.low_variation > confidence.high_variation {
            return Err(ForecastError::Config(
                "low_variation must not exceed high_variation".to_string(),
            ));
        }

        if !(self.pace_tolerance > 0.0 && self.pace_tolerance <= 1.0) {
            return Err(ForecastError::Config(format!(
                "pace_tolerance must be in (0, 1], got {}",
                self.pace_tolerance
            )));
        }

        Ok(())
    }
}

fn check_weights(name: &str, weights: &[f64]) -> Result<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ForecastError::Config(format!(
            "{} weights must be finite and non-negative",
            name
        )));
    }

    let total: f64 = weights.iter().sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ForecastError::Config(format!(
            "{} weights must sum to 1, got {}",
            name, total
        )));
    }

    Ok(())
}
