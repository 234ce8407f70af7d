use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];
    /// Sampling weights, aligned with `ALL`
    pub const WEIGHTS: [f64; 3] = [0.85, 0.05, 0.1];
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    DineIn,
    Takeaway,
    Delivery,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::DineIn,
        TransactionType::Takeaway,
        TransactionType::Delivery,
    ];
    /// Sampling weights, aligned with `ALL`
    pub const WEIGHTS: [f64; 3] = [0.5, 0.2, 0.3];
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    QrCode,
    EWallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Card,
        PaymentMethod::QrCode,
        PaymentMethod::EWallet,
    ];
    /// Sampling weights, aligned with `ALL`
    pub const WEIGHTS: [f64; 4] = [0.5, 0.1, 0.3, 0.1];
}

/// One synthesized transaction, field names mapped to the published column
/// names on serialization
#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    pub transaction_id: Uuid,
    pub merchant_id: u32,
    #[serde(rename = "transaction_status")]
    pub status: TransactionStatus,
    pub transaction_type: TransactionType,
    #[serde(rename = "transaction_payment_method")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "transaction_amount")]
    pub amount: f64,
    #[serde(rename = "transaction_datetime")]
    pub timestamp: NaiveDateTime,
}

/// One merchant's transactions for one calendar day, stored column-wise.
/// All columns have the same length and `timestamps` is sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBatch {
    pub date: NaiveDate,
    pub merchant_id: u32,
    pub transaction_ids: Vec<Uuid>,
    pub statuses: Vec<TransactionStatus>,
    pub transaction_types: Vec<TransactionType>,
    pub payment_methods: Vec<PaymentMethod>,
    pub amounts: Vec<f64>,
    pub timestamps: Vec<NaiveDateTime>,
}

impl DayBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.transaction_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transaction_ids.is_empty()
    }

    /// Row-oriented view over the columns, for serializers
    #[must_use]
    pub fn records(&self) -> impl Iterator<Item = TransactionRecord> + '_ {
        (0..self.len()).map(move |row| TransactionRecord {
            transaction_id: self.transaction_ids[row],
            merchant_id: self.merchant_id,
            status: self.statuses[row],
            transaction_type: self.transaction_types[row],
            payment_method: self.payment_methods[row],
            amount: self.amounts[row],
            timestamp: self.timestamps[row],
        })
    }
}
