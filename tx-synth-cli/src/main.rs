use std::error::Error;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use csv::WriterBuilder;
use log::info;

use tx_synth::generator::{TransactionGenerator, DEFAULT_SEED};
use tx_synth::pattern::TransactionPattern;
use tx_synth::record::DayBatch;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// First day of the generated range, ISO format (2024-01-01)
    pub(crate) start_date: NaiveDate,
    /// Last day of the generated range, inclusive
    pub(crate) end_date: NaiveDate,
    /// Number of merchants to simulate
    #[clap(long, default_value_t = 10)]
    pub(crate) merchants: u32,
    /// Seed for the merchant profile stream
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub(crate) seed: u64,
    /// Baseline added to every merchant's average transaction amount
    #[clap(long, default_value_t = 0.0)]
    pub(crate) base_amount: f64,
    /// Baseline added to every merchant's average daily transaction count
    #[clap(long, default_value_t = 0.0)]
    pub(crate) base_transaction_count: f64,
    /// Linear day-over-day growth of transaction volume
    #[clap(long, default_value_t = 0.0)]
    pub(crate) trend_factor: f64,
    /// Upper bound for each merchant's weekend amplification
    #[clap(long, default_value_t = 1.5)]
    pub(crate) max_weekend_factor: f64,
    /// Directory the per-day CSV files are written to
    #[clap(long, default_value = "output")]
    pub(crate) output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let pattern = TransactionPattern {
        base_amount: cli.base_amount,
        base_transaction_count: cli.base_transaction_count,
        trend_factor: cli.trend_factor,
        max_weekend_factor: cli.max_weekend_factor,
    };
    let generator = TransactionGenerator::new(
        cli.start_date,
        cli.end_date,
        cli.merchants,
        pattern,
        cli.seed,
    )?;

    fs::create_dir_all(&cli.output_dir)?;
    write_day_files(
        &cli.output_dir,
        generator.merchants().len(),
        generator.batches(),
    )?;

    Ok(())
}

fn write_day_files(
    output_dir: &Path,
    batches_per_day: usize,
    mut batches: impl Iterator<Item = DayBatch>,
) -> Result<(), Box<dyn Error>> {
    while let Some(first) = batches.next() {
        let date = first.date;
        let path = output_dir.join(format!("transactions_{}.csv", date));
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;

        writer.write_record(&vec![
            "transaction_id",
            "merchant_id",
            "transaction_status",
            "transaction_type",
            "transaction_payment_method",
            "transaction_amount",
            "transaction_datetime",
        ])?;

        let mut rows = 0;
        for batch in iter::once(first).chain(batches.by_ref().take(batches_per_day - 1)) {
            for record in batch.records() {
                writer.serialize(record)?;
                rows += 1;
            }
        }
        writer.flush()?;
        info!("transactions_{}.csv written with {} rows.", date, rows);
    }

    Ok(())
}
