use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge-amber",
            OrderStatus::Processing => "badge badge-blue",
            OrderStatus::Delivered => "badge badge-green",
            OrderStatus::Cancelled => "badge badge-red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub placed: Date,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub address: String,
    pub payment: String,
}

impl Order {
    /// Whether the order was placed within the last `days` days of `today`.
    pub fn placed_within(&self, days: i64, today: Date) -> bool {
        match today.checked_sub(jiff::Span::new().days(days)) {
            Ok(cutoff) => self.placed >= cutoff,
            Err(_) => false,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.to_lowercase().contains(&term)
            || self.customer.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-1234".into(),
            customer: "John Doe".into(),
            email: "john@example.com".into(),
            placed: date(2025, 4, 20),
            status: OrderStatus::Delivered,
            total: 129.99,
            items: vec![
                OrderItem {
                    name: "Astrology Book".into(),
                    price: 49.99,
                    quantity: 1,
                },
                OrderItem {
                    name: "Crystal Set".into(),
                    price: 79.99,
                    quantity: 1,
                },
            ],
            address: "123 Main St, Anytown, USA".into(),
            payment: "Credit Card".into(),
        },
        Order {
            id: "ORD-2345".into(),
            customer: "Jane Smith".into(),
            email: "jane@example.com".into(),
            placed: date(2025, 4, 19),
            status: OrderStatus::Processing,
            total: 59.99,
            items: vec![OrderItem {
                name: "Tarot Deck".into(),
                price: 29.99,
                quantity: 2,
            }],
            address: "456 Oak Ave, Somewhere, USA".into(),
            payment: "PayPal".into(),
        },
        Order {
            id: "ORD-3456".into(),
            customer: "Mike Johnson".into(),
            email: "mike@example.com".into(),
            placed: date(2025, 4, 18),
            status: OrderStatus::Pending,
            total: 149.99,
            items: vec![OrderItem {
                name: "Astrological Chart Reading".into(),
                price: 149.99,
                quantity: 1,
            }],
            address: "789 Pine Rd, Elsewhere, USA".into(),
            payment: "Credit Card".into(),
        },
        Order {
            id: "ORD-4567".into(),
            customer: "Sarah Wilson".into(),
            email: "sarah@example.com".into(),
            placed: date(2025, 4, 17),
            status: OrderStatus::Cancelled,
            total: 89.99,
            items: vec![OrderItem {
                name: "Zodiac Pendant".into(),
                price: 89.99,
                quantity: 1,
            }],
            address: "101 Elm St, Nowhere, USA".into(),
            payment: "Debit Card".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_window_is_inclusive() {
        let order = &sample_orders()[0];
        assert!(order.placed_within(7, date(2025, 4, 25)));
        assert!(order.placed_within(7, date(2025, 4, 27)));
        assert!(!order.placed_within(7, date(2025, 4, 28)));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let orders = sample_orders();
        assert!(orders[0].matches_search("ord-1234"));
        assert!(orders[1].matches_search("JANE"));
        assert!(orders[2].matches_search("mike@example.com"));
        assert!(!orders[3].matches_search("nobody"));
    }
}
