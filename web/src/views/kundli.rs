use dioxus::document::eval;
use dioxus::prelude::*;
use types::kundli::{KundliRequest, sample_kundli_requests};

use crate::toast::use_toasts;
use crate::views::components::{Modal, PageHeader, SearchInput};

fn whatsapp_share_url(request: &KundliRequest) -> Option<url::Url> {
    let text = format!(
        "Namaste {}! Your kundli report for {} is ready. Request #{}.",
        request.name, request.city, request.id,
    );
    url::Url::parse_with_params("https://wa.me/", [("text", text.as_str())]).ok()
}

fn mailto_share_url(request: &KundliRequest) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("subject", &format!("Your Kundli Report #{}", request.id))
        .append_pair(
            "body",
            &format!(
                "Dear {},\n\nYour kundli report is ready. Thank you for choosing AstralAdmin.",
                request.name,
            ),
        )
        .finish();
    format!("mailto:{}?{}", request.email, query)
}

fn open_in_new_tab(target: &str) {
    let mut escaped = String::with_capacity(target.len());
    for c in target.chars() {
        match c {
            '\'' => escaped.push_str("\\'"),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    let _ = eval(&format!("window.open('{escaped}', '_blank');"));
}

#[component]
pub fn Kundli() -> Element {
    let mut toasts = use_toasts();
    let requests = use_signal(sample_kundli_requests);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<KundliRequest>);

    let query = search.read().to_lowercase();
    let rows: Vec<KundliRequest> = requests
        .read()
        .iter()
        .filter(|r| {
            query.is_empty()
                || r.name.to_lowercase().contains(&query)
                || r.email.to_lowercase().contains(&query)
                || r.city.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    rsx! {
        div {
            PageHeader {
                title: "Kundli Requests",
                subtitle: "Birth-chart readings requested by customers.",
            }

            div { class: "card",
                div { class: "card-header",
                    SearchInput { value: search, placeholder: "Search by name, email or city..." }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Contact" }
                                th { "City" }
                                th { "Payment" }
                                th { "Status" }
                                th { "Date" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "7", class: "cell-empty", "No kundli requests found." }
                                }
                            }
                            for request in rows {
                                {
                                    let view_request = request.clone();
                                    rsx! {
                                        tr { key: "{request.id}",
                                            td { class: "cell-strong", "{request.name}" }
                                            td {
                                                div { "{request.email}" }
                                                div { class: "cell-muted", "{request.phone}" }
                                            }
                                            td { "{request.city}" }
                                            td {
                                                span {
                                                    class: request.payment_status.badge_class(),
                                                    {request.payment_status.label()}
                                                }
                                            }
                                            td {
                                                span { class: request.status.badge_class(), {request.status.label()} }
                                            }
                                            td { "{request.requested}" }
                                            td {
                                                button {
                                                    class: "btn btn-ghost",
                                                    onclick: move |_| selected.set(Some(view_request.clone())),
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

            if let Some(request) = selected() {
                {
                    let whatsapp_request = request.clone();
                    let mail_request = request.clone();
                    let download_name = request.name.clone();
                    rsx! {
                        Modal {
                            title: "Kundli Request",
                            on_close: move |_| selected.set(None),
                            dl { class: "detail-list",
                                div { class: "detail-row",
                                    dt { "Name" }
                                    dd { "{request.name}" }
                                }
                                div { class: "detail-row",
                                    dt { "Email" }
                                    dd { "{request.email}" }
                                }
                                div { class: "detail-row",
                                    dt { "Phone" }
                                    dd { "{request.phone}" }
                                }
                                div { class: "detail-row",
                                    dt { "Birth City" }
                                    dd { "{request.city}" }
                                }
                                div { class: "detail-row",
                                    dt { "Payment" }
                                    dd {
                                        span {
                                            class: request.payment_status.badge_class(),
                                            {request.payment_status.label()}
                                        }
                                    }
                                }
                                div { class: "detail-row",
                                    dt { "Status" }
                                    dd {
                                        span { class: request.status.badge_class(), {request.status.label()} }
                                    }
                                }
                                div { class: "detail-row",
                                    dt { "Requested" }
                                    dd { "{request.requested}" }
                                }
                            }
                            div { class: "modal-footer",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| {
                                        if let Some(share) = whatsapp_share_url(&whatsapp_request) {
                                            open_in_new_tab(share.as_str());
                                        }
                                    },
                                    "Share on WhatsApp"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| {
                                        open_in_new_tab(&mailto_share_url(&mail_request));
                                    },
                                    "Share by Email"
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        toasts.success(format!("Report for {download_name} is downloading"));
                                    },
                                    "Download Report"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::kundli::sample_kundli_requests;

    #[test]
    fn whatsapp_link_carries_the_message_text() {
        let request = &sample_kundli_requests()[0];
        let share = whatsapp_share_url(request).unwrap();
        assert_eq!(share.host_str(), Some("wa.me"));
        let text: String = share
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains(&request.name));
        assert!(text.contains(&request.city));
    }

    #[test]
    fn mailto_link_targets_the_requester() {
        let request = &sample_kundli_requests()[1];
        let link = mailto_share_url(request);
        assert!(link.starts_with(&format!("mailto:{}?", request.email)));
        assert!(link.contains("subject="));
    }
}
