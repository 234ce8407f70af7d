use rand::distributions::WeightedError;
use rand_distr::NormalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("End date precedes start date")]
    InvalidDateRange,
    #[error("Merchant count must be at least 1")]
    NoMerchants,
    #[error("Weekend factor bound must be at least 1")]
    InvalidWeekendFactor,
    #[error("Invalid distribution parameters")]
    DistributionError(#[from] NormalError),
    #[error("Invalid categorical weights")]
    WeightError(#[from] WeightedError),
    #[error("Day index past the end of the date range")]
    DayOutOfRange,
}
