//! Heuristic confidence in a projection
//!
//! Grows with the number of recorded days and moves up or down with the
//! day-to-day volatility of sales. Informational only: it never feeds back
//! into the projected total.

use crate::config::ConfidencePolicy;
use sales_math::coefficient_of_variation;

/// Score in `[policy.min, policy.max]` for the recorded daily amounts
pub fn confidence_score(policy: &ConfidencePolicy, amounts: &[f64]) -> u8 {
    let recorded_days = amounts.len();
    let mut score = i32::from(policy.base_score(recorded_days));

    if recorded_days >= policy.variation_min_days && recorded_days > 0 {
        let variation = coefficient_of_variation(amounts).unwrap_or(0.0);
        if variation < policy.low_variation {
            score += i32::from(policy.variation_bonus);
        } else if variation > policy.high_variation {
            score -= i32::from(policy.variation_penalty);
        }
        tracing::trace!(variation, score, "volatility adjustment");
    }

    let clamped = score.clamp(i32::from(policy.min), i32::from(policy.max));
    u8::try_from(clamped).unwrap_or(policy.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_skip_volatility() {
        let policy = ConfidencePolicy::default();
        assert_eq!(confidence_score(&policy, &[1000.0]), 50);
        assert_eq!(confidence_score(&policy, &[10.0, 5000.0]), 50);
    }

    #[test]
    fn steady_sales_gain_bonus() {
        let policy = ConfidencePolicy::default();
        assert_eq!(confidence_score(&policy, &[100.0, 105.0, 95.0]), 65);
        assert_eq!(confidence_score(&policy, &[100.0; 20]), 95);
    }

    #[test]
    fn volatile_sales_lose_confidence() {
        let policy = ConfidencePolicy::default();
        // Mean 340, population std dev ~456: coefficient ~1.34
        assert_eq!(confidence_score(&policy, &[10.0, 20.0, 1200.0, 50.0, 420.0]), 45);
    }

    #[test]
    fn clamps_to_bounds() {
        let policy = ConfidencePolicy {
            base: 10,
            tiers: Vec::new(),
            ..ConfidencePolicy::default()
        };
        assert_eq!(confidence_score(&policy, &[1.0]), 30);
    }
}
