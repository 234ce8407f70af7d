use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};
use uuid::Uuid;

use crate::error::SynthError;
use crate::merchant::Merchant;
use crate::pattern::TransactionPattern;
use crate::record::{DayBatch, PaymentMethod, TransactionStatus, TransactionType};

/// Conventional seed for reproducible demo datasets
pub const DEFAULT_SEED: u64 = 42;

#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct TransactionGenerator {
    start_date: NaiveDate,
    num_days: usize,
    merchants: Vec<Merchant>,
    pattern: TransactionPattern,
    samplers: FieldSamplers,
}

#[derive(Debug)]
struct FieldSamplers {
    status: WeightedIndex<f64>,
    transaction_type: WeightedIndex<f64>,
    payment_method: WeightedIndex<f64>,
    noise: Normal<f64>,
}

impl FieldSamplers {
    fn new() -> Result<Self, SynthError> {
        Ok(FieldSamplers {
            status: WeightedIndex::new(TransactionStatus::WEIGHTS)?,
            transaction_type: WeightedIndex::new(TransactionType::WEIGHTS)?,
            payment_method: WeightedIndex::new(PaymentMethod::WEIGHTS)?,
            noise: Normal::new(1.0, 0.1)?,
        })
    }
}

impl TransactionGenerator {
    /// # Errors
    /// Errors when `end_date` precedes `start_date`, when `num_merchants` is
    /// zero, or when the pattern's `max_weekend_factor` is below 1
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        num_merchants: u32,
        pattern: TransactionPattern,
        random_seed: u64,
    ) -> Result<Self, SynthError> {
        if end_date < start_date {
            return Err(SynthError::InvalidDateRange);
        }
        let num_days = (end_date - start_date).num_days() as usize + 1;
        let merchants = Merchant::build_all(random_seed, &pattern, num_merchants)?;
        let samplers = FieldSamplers::new()?;

        Ok(TransactionGenerator {
            start_date,
            num_days,
            merchants,
            pattern,
            samplers,
        })
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    #[must_use]
    pub fn merchants(&self) -> &[Merchant] {
        &self.merchants
    }

    #[must_use]
    pub fn pattern(&self) -> &TransactionPattern {
        &self.pattern
    }

    /// Synthesizes one batch per merchant for the given day, merchants in id
    /// order. Each day runs on a stream seeded from `day_index` alone, so
    /// days can be produced independently and in any order. Within a batch
    /// the stream is consumed field by field: statuses, types, payment
    /// methods, amounts, timestamp offsets.
    ///
    /// # Errors
    /// Errors when `day_index` is past the end of the date range
    pub fn synthesize_day(&self, day_index: usize) -> Result<Vec<DayBatch>, SynthError> {
        if day_index >= self.num_days {
            return Err(SynthError::DayOutOfRange);
        }

        let date = self.start_date + Duration::days(day_index as i64);
        let mut rng = StdRng::seed_from_u64(day_index as u64);
        // one noise draw per day, taken before any merchant batch
        let noise = self.samplers.noise.sample(&mut rng);

        let batches = self
            .merchants
            .iter()
            .map(|merchant| self.merchant_day(merchant, date, day_index, noise, &mut rng))
            .collect();

        Ok(batches)
    }

    fn merchant_day(
        &self,
        merchant: &Merchant,
        date: NaiveDate,
        day_index: usize,
        noise: f64,
        rng: &mut StdRng,
    ) -> DayBatch {
        let factor =
            self.pattern
                .daily_factor(day_index, date.weekday(), merchant.weekend_factor, noise);
        let count = (merchant.avg_transaction_count * factor).max(0.0).round() as usize;

        let statuses = (0..count)
            .map(|_| TransactionStatus::ALL[self.samplers.status.sample(rng)])
            .collect();
        let transaction_types = (0..count)
            .map(|_| TransactionType::ALL[self.samplers.transaction_type.sample(rng)])
            .collect();
        let payment_methods = (0..count)
            .map(|_| PaymentMethod::ALL[self.samplers.payment_method.sample(rng)])
            .collect();
        let amounts = (0..count)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                (merchant.avg_amount + merchant.amount_std_dev * z).round()
            })
            .collect();

        let mut offsets: Vec<u32> = (0..count).map(|_| rng.gen_range(0..86_399)).collect();
        offsets.sort_unstable();
        let midnight = date.and_time(NaiveTime::MIN);
        let timestamps = offsets
            .into_iter()
            .map(|offset| midnight + Duration::seconds(i64::from(offset)))
            .collect();

        // ids come from the process entropy pool, not the seeded stream
        let transaction_ids = (0..count).map(|_| Uuid::new_v4()).collect();

        DayBatch {
            date,
            merchant_id: merchant.id,
            transaction_ids,
            statuses,
            transaction_types,
            payment_methods,
            amounts,
            timestamps,
        }
    }

    /// Lazy walk over the whole run, one `DayBatch` per merchant per day,
    /// days ascending and merchants in id order within a day
    #[must_use]
    pub fn batches(&self) -> Batches<'_> {
        Batches {
            generator: self,
            day_index: 0,
            current_day: Vec::new().into_iter(),
        }
    }
}

pub struct Batches<'a> {
    generator: &'a TransactionGenerator,
    day_index: usize,
    current_day: std::vec::IntoIter<DayBatch>,
}

impl Iterator for Batches<'_> {
    type Item = DayBatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(batch) = self.current_day.next() {
                return Some(batch);
            }
            if self.day_index >= self.generator.num_days {
                return None;
            }
            let day = self.generator.synthesize_day(self.day_index).ok()?;
            self.day_index += 1;
            self.current_day = day.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_days = self.generator.num_days - self.day_index;
        let remaining = self.current_day.len() + remaining_days * self.generator.merchants.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}
