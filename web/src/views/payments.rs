use dioxus::prelude::*;
use types::payments::{PaymentMethod, Transaction, sample_payment_methods, sample_transactions};

use crate::toast::use_toasts;
use crate::views::components::{Modal, PageHeader};

#[derive(Debug, Clone, PartialEq)]
struct FeeEditor {
    method_id: u32,
    name: String,
    fee: String,
}

#[component]
pub fn Payments() -> Element {
    let mut toasts = use_toasts();
    let mut methods = use_signal(sample_payment_methods);
    let transactions = use_signal(sample_transactions);
    let mut fee_editor = use_signal(|| None::<FeeEditor>);
    let mut selected = use_signal(|| None::<Transaction>);

    let mut save_fee = move |editor: FeeEditor| {
        if editor.fee.trim().is_empty() {
            toasts.error("Processing fee cannot be empty");
            return;
        }
        if let Some(method) = methods.write().iter_mut().find(|m| m.id == editor.method_id) {
            method.processing_fee = editor.fee.clone();
        }
        toasts.success(format!("{} fee updated", editor.name));
        fee_editor.set(None);
    };

    let method_rows: Vec<PaymentMethod> = methods.read().clone();
    let transaction_rows: Vec<Transaction> = transactions.read().clone();

    rsx! {
        div {
            PageHeader {
                title: "Payment Settings",
                subtitle: "Accepted methods and recent transactions.",
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Payment Methods" }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Method" }
                                th { "Processing Fee" }
                                th { "Enabled" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for method in method_rows {
                                {
                                    let toggle_id = method.id;
                                    let toggle_name = method.name.clone();
                                    let edit_state = FeeEditor {
                                        method_id: method.id,
                                        name: method.name.clone(),
                                        fee: method.processing_fee.clone(),
                                    };
                                    rsx! {
                                        tr { key: "{method.id}",
                                            td { class: "cell-strong", "{method.name}" }
                                            td { "{method.processing_fee}" }
                                            td {
                                                label { class: "toggle",
                                                    input {
                                                        r#type: "checkbox",
                                                        checked: method.enabled,
                                                        onchange: move |e| {
                                                            let enabled = e.checked();
                                                            if let Some(m) = methods
                                                                .write()
                                                                .iter_mut()
                                                                .find(|m| m.id == toggle_id)
                                                            {
                                                                m.enabled = enabled;
                                                            }
                                                            if enabled {
                                                                toasts.success(format!("{toggle_name} enabled"));
                                                            } else {
                                                                toasts.error(format!("{toggle_name} disabled"));
                                                            }
                                                        },
                                                    }
                                                    span { class: "toggle-slider" }
                                                }
                                            }
                                            td {
                                                button {
                                                    class: "btn btn-ghost",
                                                    onclick: move |_| fee_editor.set(Some(edit_state.clone())),
                                                    "Edit Fee"
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

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Recent Transactions" }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Customer" }
                                th { "Amount" }
                                th { "Date" }
                                th { "Method" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for transaction in transaction_rows {
                                {
                                    let view_transaction = transaction.clone();
                                    rsx! {
                                        tr { key: "{transaction.id}",
                                            td { class: "cell-strong", "{transaction.customer}" }
                                            td { "${transaction.amount:.2}" }
                                            td { "{transaction.date}" }
                                            td { "{transaction.method}" }
                                            td {
                                                span {
                                                    class: transaction.status.badge_class(),
                                                    {transaction.status.label()}
                                                }
                                            }
                                            td {
                                                button {
                                                    class: "btn btn-ghost",
                                                    onclick: move |_| selected.set(Some(view_transaction.clone())),
                                                    "View"
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

            if let Some(editor) = fee_editor() {
                {
                    let submit_state = editor.clone();
                    rsx! {
                        Modal {
                            title: "Edit Processing Fee",
                            on_close: move |_| fee_editor.set(None),
                            div { class: "form-group",
                                label { class: "form-label", "{editor.name}" }
                                input {
                                    class: "form-input",
                                    value: "{editor.fee}",
                                    oninput: move |e| {
                                        if let Some(state) = fee_editor.write().as_mut() {
                                            state.fee = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "modal-footer",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| fee_editor.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| save_fee(submit_state.clone()),
                                    "Save Fee"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(transaction) = selected() {
                Modal {
                    title: "Transaction #{transaction.id}",
                    on_close: move |_| selected.set(None),
                    dl { class: "detail-list",
                        div { class: "detail-row",
                            dt { "Customer" }
                            dd { "{transaction.customer}" }
                        }
                        div { class: "detail-row",
                            dt { "Amount" }
                            dd { "${transaction.amount:.2}" }
                        }
                        div { class: "detail-row",
                            dt { "Date" }
                            dd { "{transaction.date}" }
                        }
                        div { class: "detail-row",
                            dt { "Method" }
                            dd { "{transaction.method}" }
                        }
                        div { class: "detail-row",
                            dt { "Status" }
                            dd {
                                span {
                                    class: transaction.status.badge_class(),
                                    {transaction.status.label()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
