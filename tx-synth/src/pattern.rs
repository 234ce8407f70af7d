use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// Shape parameters shared by every merchant in a run
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TransactionPattern {
    pub base_amount: f64,
    pub base_transaction_count: f64,
    pub trend_factor: f64,
    pub max_weekend_factor: f64,
}

impl Default for TransactionPattern {
    fn default() -> Self {
        TransactionPattern {
            base_amount: 0.0,
            base_transaction_count: 0.0,
            trend_factor: 0.0,
            max_weekend_factor: 1.5,
        }
    }
}

impl TransactionPattern {
    /// # Errors
    /// Errors when `max_weekend_factor` is below 1 or not a number
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.max_weekend_factor.is_nan() || self.max_weekend_factor < 1.0 {
            return Err(SynthError::InvalidWeekendFactor);
        }
        Ok(())
    }

    /// Volume multiplier for one merchant on one day: linear trend over the
    /// day index, the merchant's own amplification on Saturdays and Sundays,
    /// and the day's shared noise draw
    #[must_use]
    pub fn daily_factor(
        &self,
        day_index: usize,
        weekday: Weekday,
        weekend_factor: f64,
        noise: f64,
    ) -> f64 {
        let trend = 1.0 + self.trend_factor * day_index as f64;
        let seasonality = if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            weekend_factor
        } else {
            1.0
        };
        trend * seasonality * noise
    }
}
