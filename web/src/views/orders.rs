use dioxus::document::eval;
use dioxus::prelude::*;
use types::orders::{Order, OrderStatus, sample_orders};

use crate::toast::use_toasts;
use crate::views::components::{Modal, SearchInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderTab {
    All,
    Recent,
    Processing,
}

impl OrderTab {
    const ALL: [OrderTab; 3] = [OrderTab::All, OrderTab::Recent, OrderTab::Processing];

    fn label(self) -> &'static str {
        match self {
            OrderTab::All => "All Orders",
            OrderTab::Recent => "Recent Orders",
            OrderTab::Processing => "Processing",
        }
    }
}

#[component]
pub fn Orders() -> Element {
    let mut toasts = use_toasts();
    let mut orders = use_signal(sample_orders);
    let mut tab = use_signal(|| OrderTab::All);
    let mut status_filter = use_signal(|| None::<OrderStatus>);
    let search = use_signal(String::new);
    let mut selected = use_signal(|| None::<Order>);
    let mut edit_status = use_signal(|| OrderStatus::Pending);

    let today = jiff::Zoned::now().date();

    let filtered: Vec<Order> = orders
        .read()
        .iter()
        .filter(|o| {
            let matches_tab = match *tab.read() {
                OrderTab::All => true,
                OrderTab::Recent => o.placed_within(7, today),
                OrderTab::Processing => o.status == OrderStatus::Processing,
            };
            let matches_status = (*status_filter.read()).is_none_or(|s| o.status == s);
            matches_tab && matches_status && o.matches_search(&search.read())
        })
        .cloned()
        .collect();

    let mut print_invoice = move |order_id: String| {
        let _ = eval("window.print()");
        toasts.success(format!("Invoice for order {order_id} sent to printer"));
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Order Management" }
                    p { class: "page-subtitle", "Track and update customer orders." }
                }
            }

            div { class: "tab-bar",
                for t in OrderTab::ALL {
                    button {
                        class: if *tab.read() == t { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Orders" }
                    div { class: "card-header-actions",
                        select {
                            class: "form-select",
                            onchange: move |e| {
                                status_filter.set(match e.value().as_str() {
                                    "pending" => Some(OrderStatus::Pending),
                                    "processing" => Some(OrderStatus::Processing),
                                    "delivered" => Some(OrderStatus::Delivered),
                                    "cancelled" => Some(OrderStatus::Cancelled),
                                    _ => None,
                                });
                            },
                            option { value: "all", "All Status" }
                            option { value: "pending", "Pending" }
                            option { value: "processing", "Processing" }
                            option { value: "delivered", "Delivered" }
                            option { value: "cancelled", "Cancelled" }
                        }
                        SearchInput { value: search, placeholder: "Search orders..." }
                    }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Order ID" }
                                th { "Customer" }
                                th { "Date" }
                                th { "Status" }
                                th { class: "cell-right", "Total" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if filtered.is_empty() {
                                tr {
                                    td { colspan: "6", class: "cell-empty", "No orders found." }
                                }
                            }
                            for order in filtered {
                                {
                                    let view_order = order.clone();
                                    let print_id = order.id.clone();
                                    rsx! {
                                        tr { key: "{order.id}",
                                            td { class: "cell-strong", "{order.id}" }
                                            td {
                                                div { "{order.customer}" }
                                                div { class: "cell-muted", "{order.email}" }
                                            }
                                            td { "{order.placed}" }
                                            td {
                                                span { class: order.status.badge_class(), {order.status.label()} }
                                            }
                                            td { class: "cell-right", "${order.total:.2}" }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| {
                                                            edit_status.set(view_order.status);
                                                            selected.set(Some(view_order.clone()));
                                                        },
                                                        "View"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| print_invoice(print_id.clone()),
                                                        "Print"
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
                {
                    let print_id = order.id.clone();
                    let order_id = order.id.clone();
                    rsx! {
                        OrderDetailModal {
                            order,
                            edit_status,
                            on_close: move |_| selected.set(None),
                            on_print: move |_| print_invoice(print_id.clone()),
                            on_update: move |_| {
                                let new_status = *edit_status.read();
                                let mut orders = orders;
                                orders.write().iter_mut().for_each(|o| {
                                    if o.id == order_id {
                                        o.status = new_status;
                                    }
                                });
                                toasts.success(format!(
                                    "Order {order_id} status changed to {}",
                                    new_status.label()
                                ));
                                selected.set(None);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderDetailModal(
    order: Order,
    edit_status: Signal<OrderStatus>,
    on_close: EventHandler<()>,
    on_print: EventHandler<()>,
    on_update: EventHandler<()>,
) -> Element {
    let unchanged = *edit_status.read() == order.status;

    rsx! {
        Modal {
            title: "Order Details",
            wide: true,
            on_close,
            div { class: "grid grid-cols-2",
                div {
                    h3 { class: "section-header", "Order Information" }
                    div { class: "detail-list",
                        div { class: "detail-row",
                            span { class: "detail-label", "ID" }
                            span { class: "cell-strong", "{order.id}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Date" }
                            span { "{order.placed}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Payment Method" }
                            span { "{order.payment}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Status" }
                            select {
                                class: "form-select",
                                onchange: move |e| {
                                    let mut edit_status = edit_status;
                                    edit_status.set(match e.value().as_str() {
                                        "processing" => OrderStatus::Processing,
                                        "delivered" => OrderStatus::Delivered,
                                        "cancelled" => OrderStatus::Cancelled,
                                        _ => OrderStatus::Pending,
                                    });
                                },
                                for status in OrderStatus::ALL {
                                    option {
                                        value: status.label().to_lowercase(),
                                        selected: *edit_status.read() == status,
                                        {status.label()}
                                    }
                                }
                            }
                        }
                    }

                    h3 { class: "section-header", "Customer Information" }
                    div { class: "detail-list",
                        div { class: "detail-row",
                            span { class: "detail-label", "Name" }
                            span { "{order.customer}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Email" }
                            span { "{order.email}" }
                        }
                        div { class: "detail-row",
                            span { class: "detail-label", "Shipping Address" }
                            span { "{order.address}" }
                        }
                    }
                }

                div {
                    h3 { class: "section-header", "Order Items" }
                    table {
                        thead {
                            tr {
                                th { "Item" }
                                th { class: "cell-right", "Price" }
                                th { "Qty" }
                                th { class: "cell-right", "Total" }
                            }
                        }
                        tbody {
                            for item in &order.items {
                                {
                                    let line_total = item.price * item.quantity as f64;
                                    rsx! {
                                        tr {
                                            td { "{item.name}" }
                                            td { class: "cell-right", "${item.price:.2}" }
                                            td { "{item.quantity}" }
                                            td { class: "cell-right", "${line_total:.2}" }
                                        }
                                    }
                                }
                            }
                            tr { class: "row-total",
                                td { colspan: "3", class: "cell-right", "Total:" }
                                td { class: "cell-right", "${order.total:.2}" }
                            }
                        }
                    }
                }
            }

            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_print.call(()),
                    "Print Invoice"
                }
                button {
                    class: "btn btn-primary",
                    disabled: unchanged,
                    onclick: move |_| on_update.call(()),
                    "Update Status"
                }
            }
        }
    }
}
