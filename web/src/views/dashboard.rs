use dioxus::prelude::*;

use crate::toast::use_toasts;
use crate::views::components::{Modal, SearchInput};

struct MonthlyFigure {
    month: &'static str,
    revenue: f64,
    expense: f64,
}

const MONTHLY_FIGURES: [MonthlyFigure; 12] = [
    MonthlyFigure { month: "Jan", revenue: 18000.0, expense: 12000.0 },
    MonthlyFigure { month: "Feb", revenue: 14000.0, expense: 15000.0 },
    MonthlyFigure { month: "Mar", revenue: 12000.0, expense: 11000.0 },
    MonthlyFigure { month: "Apr", revenue: 22000.0, expense: 15000.0 },
    MonthlyFigure { month: "May", revenue: 44000.0, expense: 32000.0 },
    MonthlyFigure { month: "Jun", revenue: 18000.0, expense: 19000.0 },
    MonthlyFigure { month: "Jul", revenue: 28000.0, expense: 12000.0 },
    MonthlyFigure { month: "Aug", revenue: 24000.0, expense: 11000.0 },
    MonthlyFigure { month: "Sep", revenue: 12000.0, expense: 10000.0 },
    MonthlyFigure { month: "Oct", revenue: 48000.0, expense: 36000.0 },
    MonthlyFigure { month: "Nov", revenue: 18000.0, expense: 14000.0 },
    MonthlyFigure { month: "Dec", revenue: 21000.0, expense: 15000.0 },
];

// (segment, customers, css class)
const CUSTOMER_SPLIT: [(&str, u32, &str); 2] =
    [("Male", 20_000, "split-a"), ("Female", 25_000, "split-b")];

#[derive(Debug, Clone, PartialEq)]
struct RecentOrder {
    id: &'static str,
    user: &'static str,
    item: &'static str,
    qty: u32,
    amount: &'static str,
    status: &'static str,
}

fn recent_orders() -> Vec<RecentOrder> {
    vec![
        RecentOrder {
            id: "#6352148",
            user: "Dianne Russell",
            item: "Tarot Reading (Premium)",
            qty: 2,
            amount: "$159.00",
            status: "Paid",
        },
        RecentOrder {
            id: "#6352149",
            user: "Wade Warren",
            item: "Astrology Chart",
            qty: 1,
            amount: "$89.00",
            status: "Pending",
        },
        RecentOrder {
            id: "#6352150",
            user: "Jane Cooper",
            item: "Monthly Horoscope",
            qty: 3,
            amount: "$49.00",
            status: "Processing",
        },
        RecentOrder {
            id: "#6352151",
            user: "Robert Fox",
            item: "Birth Chart Analysis",
            qty: 1,
            amount: "$199.00",
            status: "Paid",
        },
    ]
}

// (name, details, amount, is income)
const LEDGER: [(&str, &str, &str, bool); 3] = [
    ("Paypal", "Client Payment", "+$800", true),
    ("Stripe", "Service Fee", "-$300", false),
    ("Paytm", "Subscription", "-$20", false),
];

const DATE_RANGES: [&str; 3] = ["Weekly", "Monthly", "Yearly"];

#[component]
pub fn Dashboard() -> Element {
    let mut toasts = use_toasts();
    let mut orders = use_signal(recent_orders);
    let mut selected = use_signal(|| None::<RecentOrder>);
    let search = use_signal(String::new);
    let mut date_range = use_signal(|| "Yearly");

    let total_revenue: f64 = MONTHLY_FIGURES.iter().map(|m| m.revenue).sum();
    let total_expense: f64 = MONTHLY_FIGURES.iter().map(|m| m.expense).sum();
    let customers: u32 = CUSTOMER_SPLIT.iter().map(|(_, n, _)| n).sum();
    let max_revenue = MONTHLY_FIGURES
        .iter()
        .map(|m| m.revenue)
        .fold(0.0_f64, f64::max);

    let order_count = orders.read().len();
    let filtered: Vec<RecentOrder> = orders
        .read()
        .iter()
        .filter(|o| {
            let term = search.read().to_lowercase();
            o.id.to_lowercase().contains(&term)
                || o.user.to_lowercase().contains(&term)
                || o.item.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "A celestial overview of the business." }
                }
                div { class: "page-header-actions",
                    for range in DATE_RANGES {
                        button {
                            class: if *date_range.read() == range { "btn btn-secondary active" } else { "btn btn-secondary" },
                            onclick: move |_| {
                                date_range.set(range);
                                toasts.success(format!("Data now showing for {range} period"));
                            },
                            "{range}"
                        }
                    }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-label", "Total Revenue" }
                    span { class: "stat-value", "${total_revenue:.0}" }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Total Expenses" }
                    span { class: "stat-value", "${total_expense:.0}" }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Customers" }
                    span { class: "stat-value", "{customers}" }
                }
                div { class: "stat-card",
                    span { class: "stat-label", "Orders" }
                    span { class: "stat-value", "{order_count}" }
                }
            }

            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Revenue vs Expenses ({date_range})" }
                    }
                    div { class: "bar-chart",
                        for figure in &MONTHLY_FIGURES {
                            {
                                let revenue_pct = figure.revenue / max_revenue * 100.0;
                                let expense_pct = figure.expense / max_revenue * 100.0;
                                rsx! {
                                    div { class: "bar-group",
                                        div { class: "bar-pair",
                                            div {
                                                class: "bar bar-revenue",
                                                style: "height: {revenue_pct}%",
                                                title: "Revenue ${figure.revenue:.0}",
                                            }
                                            div {
                                                class: "bar bar-expense",
                                                style: "height: {expense_pct}%",
                                                title: "Expenses ${figure.expense:.0}",
                                            }
                                        }
                                        span { class: "bar-label", "{figure.month}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Customers" }
                    }
                    div { class: "card-body",
                        for (name, count, class) in CUSTOMER_SPLIT {
                            {
                                let pct = count as f64 / customers as f64 * 100.0;
                                rsx! {
                                    div { class: "split-row",
                                        span { class: "split-name", "{name}" }
                                        div { class: "split-track",
                                            div {
                                                class: "split-fill {class}",
                                                style: "width: {pct}%",
                                            }
                                        }
                                        span { class: "split-count", "{count}" }
                                    }
                                }
                            }
                        }

                        div { class: "divider" }

                        h3 { class: "section-header", "Transactions" }
                        ul { class: "ledger",
                            for (name, details, amount, income) in LEDGER {
                                li { class: "ledger-row",
                                    div {
                                        div { class: "ledger-name", "{name}" }
                                        div { class: "ledger-details", "{details}" }
                                    }
                                    span {
                                        class: if income { "ledger-amount income" } else { "ledger-amount expense" },
                                        "{amount}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Recent Orders" }
                    SearchInput { value: search, placeholder: "Search orders..." }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Order ID" }
                                th { "Customer" }
                                th { "Item" }
                                th { "Qty" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for order in filtered {
                                {
                                    let view_order = order.clone();
                                    let delete_id = order.id;
                                    rsx! {
                                        tr { key: "{order.id}",
                                            td { class: "cell-strong", "{order.id}" }
                                            td { "{order.user}" }
                                            td { "{order.item}" }
                                            td { "{order.qty}" }
                                            td { "{order.amount}" }
                                            td { span { class: "badge badge-blue", "{order.status}" } }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| selected.set(Some(view_order.clone())),
                                                        "View"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost danger",
                                                        onclick: move |_| {
                                                            orders.write().retain(|o| o.id != delete_id);
                                                            toasts.error(format!("Order {delete_id} has been deleted"));
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(order) = selected() {
                Modal {
                    title: "Order {order.id}",
                    on_close: move |_| selected.set(None),
                    div { class: "detail-list",
                        div { class: "detail-row",
                            span { class: "detail-label", "Customer" }
                            span { "{order.user}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Item" }
                            span { "{order.item}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Quantity" }
                            span { "{order.qty}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Amount" }
                            span { "{order.amount}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Status" }
                            span { "{order.status}" }
                        }
                    }
                }
            }
        }
    }
}
