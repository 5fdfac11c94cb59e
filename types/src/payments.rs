use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

pub use crate::kundli::PaymentStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: u32,
    pub name: String,
    pub enabled: bool,
    pub processing_fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub customer: String,
    pub amount: f64,
    pub date: Date,
    pub method: String,
    pub status: PaymentStatus,
}

pub fn sample_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: 1,
            name: "Credit/Debit Card".into(),
            enabled: true,
            processing_fee: "2.9% + $0.30".into(),
        },
        PaymentMethod {
            id: 2,
            name: "PayPal".into(),
            enabled: true,
            processing_fee: "3.5% + $0.49".into(),
        },
        PaymentMethod {
            id: 3,
            name: "Bank Transfer".into(),
            enabled: false,
            processing_fee: "$0.50 per transaction".into(),
        },
        PaymentMethod {
            id: 4,
            name: "Cryptocurrency".into(),
            enabled: false,
            processing_fee: "1%".into(),
        },
    ]
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            customer: "Raj Sharma".into(),
            amount: 49.99,
            date: date(2025, 4, 10),
            method: "Credit Card".into(),
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: 2,
            customer: "Priya Patel".into(),
            amount: 29.99,
            date: date(2025, 4, 8),
            method: "PayPal".into(),
            status: PaymentStatus::Paid,
        },
        Transaction {
            id: 3,
            customer: "Amit Kumar".into(),
            amount: 99.99,
            date: date(2025, 4, 5),
            method: "Credit Card".into(),
            status: PaymentStatus::Pending,
        },
        Transaction {
            id: 4,
            customer: "Maya Singh".into(),
            amount: 19.99,
            date: date(2025, 4, 2),
            method: "Credit Card".into(),
            status: PaymentStatus::Failed,
        },
        Transaction {
            id: 5,
            customer: "Vikram Joshi".into(),
            amount: 79.99,
            date: date(2025, 3, 28),
            method: "PayPal".into(),
            status: PaymentStatus::Paid,
        },
    ]
}
