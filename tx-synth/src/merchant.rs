use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};
use serde::Serialize;

use crate::error::SynthError;
use crate::pattern::TransactionPattern;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Merchant {
    pub id: u32,
    pub avg_transaction_count: f64,
    pub avg_amount: f64,
    pub amount_std_dev: f64,
    pub weekend_factor: f64,
}

impl Merchant {
    /// Derives the full roster from a single seeded stream, ids 1 through
    /// `num_merchants` in draw order. The per-merchant draw order is fixed:
    /// count offset, amount offset, amount spread, weekend factor.
    ///
    /// # Errors
    /// Errors when `num_merchants` is zero or when the pattern's
    /// `max_weekend_factor` is below 1
    pub fn build_all(
        seed: u64,
        pattern: &TransactionPattern,
        num_merchants: u32,
    ) -> Result<Vec<Merchant>, SynthError> {
        pattern.validate()?;
        if num_merchants == 0 {
            return Err(SynthError::NoMerchants);
        }

        let count_offset = LogNormal::new(3.0, 0.25)?;
        let amount_offset = LogNormal::new(9.0, 0.5)?;
        let mut rng = StdRng::seed_from_u64(seed);

        let merchants = (1..=num_merchants)
            .map(|id| {
                let avg_transaction_count =
                    pattern.base_transaction_count + count_offset.sample(&mut rng);
                let avg_amount = pattern.base_amount + amount_offset.sample(&mut rng);
                let amount_std_dev = rng.gen_range(1_000.0..3_000.0);
                let weekend_factor = rng.gen_range(1.0..=pattern.max_weekend_factor);
                Merchant {
                    id,
                    avg_transaction_count,
                    avg_amount,
                    amount_std_dev,
                    weekend_factor,
                }
            })
            .collect();

        Ok(merchants)
    }
}
