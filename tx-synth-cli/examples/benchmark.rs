use std::error::Error;
use std::time::Instant;

use chrono::NaiveDate;
use log::{error, warn};

use tx_synth::generator::{TransactionGenerator, DEFAULT_SEED};
use tx_synth::pattern::TransactionPattern;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let start_date: NaiveDate = "2024-01-01".parse()?;
    let end_date: NaiveDate = "2024-12-31".parse()?;
    let pattern = TransactionPattern {
        base_amount: 0.0,
        base_transaction_count: 100.0,
        trend_factor: 0.001,
        max_weekend_factor: 1.5,
    };

    let start = Instant::now();
    let generator = TransactionGenerator::new(start_date, end_date, 50, pattern, DEFAULT_SEED)?;
    let elapsed = start.elapsed();
    error!("Building merchant profiles took: {:.2?}", elapsed);

    let start_synthesis = Instant::now();
    let mut rows = 0_usize;
    for batch in generator.batches() {
        rows += batch.len();
    }
    let elapsed_synthesis = start_synthesis.elapsed();
    warn!("Synthesizing {} rows took: {:.2?}", rows, elapsed_synthesis);

    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
