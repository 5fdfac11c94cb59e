use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "badge badge-green",
            PaymentStatus::Pending => "badge badge-amber",
            PaymentStatus::Failed => "badge badge-red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KundliStatus {
    Pending,
    InProgress,
    Completed,
}

impl KundliStatus {
    pub fn label(self) -> &'static str {
        match self {
            KundliStatus::Pending => "Pending",
            KundliStatus::InProgress => "In Progress",
            KundliStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            KundliStatus::Pending => "badge badge-amber",
            KundliStatus::InProgress => "badge badge-blue",
            KundliStatus::Completed => "badge badge-green",
        }
    }
}

/// A birth-chart reading request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundliRequest {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub payment_status: PaymentStatus,
    pub status: KundliStatus,
    pub requested: Date,
}

pub fn sample_kundli_requests() -> Vec<KundliRequest> {
    vec![
        KundliRequest {
            id: 1,
            name: "Raj Sharma".into(),
            email: "raj.sharma@example.com".into(),
            phone: "+91 98765 43210".into(),
            city: "Mumbai".into(),
            payment_status: PaymentStatus::Paid,
            status: KundliStatus::Completed,
            requested: date(2025, 4, 1),
        },
        KundliRequest {
            id: 2,
            name: "Priya Patel".into(),
            email: "priya.patel@example.com".into(),
            phone: "+91 87654 32109".into(),
            city: "Delhi".into(),
            payment_status: PaymentStatus::Pending,
            status: KundliStatus::Completed,
            requested: date(2025, 3, 28),
        },
        KundliRequest {
            id: 3,
            name: "Amit Kumar".into(),
            email: "amit.kumar@example.com".into(),
            phone: "+91 76543 21098".into(),
            city: "Bangalore".into(),
            payment_status: PaymentStatus::Paid,
            status: KundliStatus::Pending,
            requested: date(2025, 4, 5),
        },
        KundliRequest {
            id: 4,
            name: "Maya Singh".into(),
            email: "maya.singh@example.com".into(),
            phone: "+91 65432 10987".into(),
            city: "Kolkata".into(),
            payment_status: PaymentStatus::Failed,
            status: KundliStatus::InProgress,
            requested: date(2025, 4, 7),
        },
        KundliRequest {
            id: 5,
            name: "Vikram Joshi".into(),
            email: "vikram.joshi@example.com".into(),
            phone: "+91 54321 09876".into(),
            city: "Chennai".into(),
            payment_status: PaymentStatus::Paid,
            status: KundliStatus::Completed,
            requested: date(2025, 3, 20),
        },
    ]
}
