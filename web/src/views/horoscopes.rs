use dioxus::prelude::*;
use types::horoscopes::{Horoscope, Period, ZODIAC_SIGNS, sample_horoscopes};

use crate::toast::use_toasts;
use crate::views::components::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Sign,
    Period,
    Date,
}

#[derive(Debug, Clone, PartialEq)]
struct EditorState {
    /// `None` when creating a new horoscope.
    id: Option<u32>,
    sign: String,
    period: Period,
    published: String,
    content: String,
}

impl EditorState {
    fn for_sign(sign: &str, today: jiff::civil::Date) -> Self {
        Self {
            id: None,
            sign: sign.to_owned(),
            period: Period::Daily,
            published: today.to_string(),
            content: String::new(),
        }
    }

    fn for_existing(h: &Horoscope) -> Self {
        Self {
            id: Some(h.id),
            sign: h.sign.clone(),
            period: h.period,
            published: h.published.to_string(),
            content: h.content.clone(),
        }
    }
}

fn parse_period(value: &str) -> Period {
    match value {
        "Weekly" => Period::Weekly,
        "Monthly" => Period::Monthly,
        _ => Period::Daily,
    }
}

#[component]
pub fn Horoscopes() -> Element {
    let mut toasts = use_toasts();
    let mut horoscopes = use_signal(sample_horoscopes);
    let mut editor = use_signal(|| None::<EditorState>);
    let mut sort_column = use_signal(|| SortColumn::Sign);
    let mut sort_desc = use_signal(|| false);
    let mut period_filter = use_signal(|| None::<Period>);

    let today = jiff::Zoned::now().date();

    let mut sort_by = move |column: SortColumn| {
        if *sort_column.read() == column {
            let flipped = !*sort_desc.read();
            sort_desc.set(flipped);
        } else {
            sort_column.set(column);
            sort_desc.set(false);
        }
    };

    let mut save = move |state: EditorState| {
        if state.content.trim().is_empty() {
            toasts.error("Please fill all required fields");
            return;
        }
        let published = match state.published.parse::<jiff::civil::Date>() {
            Ok(date) => date,
            Err(_) => {
                toasts.error("Please enter a valid date");
                return;
            }
        };

        let mut horoscopes = horoscopes.write();
        match state.id {
            Some(id) => {
                if let Some(existing) = horoscopes.iter_mut().find(|h| h.id == id) {
                    existing.sign = state.sign.clone();
                    existing.period = state.period;
                    existing.published = published;
                    existing.content = state.content.clone();
                }
                toasts.success(format!("{} horoscope updated", state.sign));
            }
            None => {
                let id = horoscopes.iter().map(|h| h.id).max().unwrap_or(0) + 1;
                horoscopes.push(Horoscope {
                    id,
                    sign: state.sign.clone(),
                    period: state.period,
                    published,
                    content: state.content.clone(),
                });
                toasts.success(format!("{} horoscope published", state.sign));
            }
        }
        drop(horoscopes);
        editor.set(None);
    };

    let mut rows: Vec<Horoscope> = horoscopes
        .read()
        .iter()
        .filter(|h| (*period_filter.read()).is_none_or(|p| h.period == p))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        let ordering = match *sort_column.read() {
            SortColumn::Sign => a.sign.cmp(&b.sign),
            SortColumn::Period => a.period.cmp(&b.period),
            SortColumn::Date => a.published.cmp(&b.published),
        };
        if *sort_desc.read() { ordering.reverse() } else { ordering }
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Horoscope Management" }
                    p { class: "page-subtitle", "Write and publish readings for every sign." }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Zodiac Signs" }
                }
                div { class: "zodiac-grid",
                    for sign in ZODIAC_SIGNS {
                        button {
                            key: "{sign.name}",
                            class: "zodiac-card",
                            onclick: move |_| {
                                editor.set(Some(EditorState::for_sign(sign.name, today)));
                            },
                            span { class: "zodiac-symbol", "{sign.symbol}" }
                            span { class: "zodiac-name", "{sign.name}" }
                            span { class: "zodiac-meta", "{sign.element} \u{b7} {sign.date_range}" }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Published Horoscopes" }
                    select {
                        class: "form-select",
                        onchange: move |e| {
                            period_filter.set(match e.value().as_str() {
                                "Daily" => Some(Period::Daily),
                                "Weekly" => Some(Period::Weekly),
                                "Monthly" => Some(Period::Monthly),
                                _ => None,
                            });
                        },
                        option { value: "all", "All Periods" }
                        for period in Period::ALL {
                            option { value: period.label(), {period.label()} }
                        }
                    }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th {
                                    button { class: "th-sort", onclick: move |_| sort_by(SortColumn::Sign), "Sign \u{2195}" }
                                }
                                th {
                                    button { class: "th-sort", onclick: move |_| sort_by(SortColumn::Period), "Period \u{2195}" }
                                }
                                th {
                                    button { class: "th-sort", onclick: move |_| sort_by(SortColumn::Date), "Date \u{2195}" }
                                }
                                th { "Content" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "5", class: "cell-empty", "No horoscopes found." }
                                }
                            }
                            for horoscope in rows {
                                {
                                    let edit_state = EditorState::for_existing(&horoscope);
                                    let delete_id = horoscope.id;
                                    let delete_sign = horoscope.sign.clone();
                                    rsx! {
                                        tr { key: "{horoscope.id}",
                                            td { class: "cell-strong", "{horoscope.sign}" }
                                            td { {horoscope.period.label()} }
                                            td { "{horoscope.published}" }
                                            td { class: "cell-clamp", "{horoscope.content}" }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| editor.set(Some(edit_state.clone())),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost danger",
                                                        onclick: move |_| {
                                                            horoscopes.write().retain(|h| h.id != delete_id);
                                                            toasts.error(format!("{delete_sign} horoscope deleted"));
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

            if let Some(state) = editor() {
                {
                    let title = if state.id.is_some() { "Edit Horoscope" } else { "New Horoscope" };
                    let submit_state = state.clone();
                    rsx! {
                        Modal {
                            title: "{title}",
                            on_close: move |_| editor.set(None),
                            div { class: "form-group",
                                label { class: "form-label", "Sign" }
                                select {
                                    class: "form-select",
                                    onchange: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.sign = e.value();
                                        }
                                    },
                                    for sign in ZODIAC_SIGNS {
                                        option { value: sign.name, selected: state.sign == sign.name, "{sign.name}" }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Period" }
                                select {
                                    class: "form-select",
                                    onchange: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.period = parse_period(&e.value());
                                        }
                                    },
                                    for period in Period::ALL {
                                        option {
                                            value: period.label(),
                                            selected: state.period == period,
                                            {period.label()}
                                        }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Date" }
                                input {
                                    class: "form-input",
                                    r#type: "date",
                                    value: "{state.published}",
                                    oninput: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.published = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Content" }
                                textarea {
                                    class: "form-input form-textarea",
                                    rows: "5",
                                    value: "{state.content}",
                                    oninput: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.content = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "modal-footer",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| editor.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| save(submit_state.clone()),
                                    "Save Horoscope"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
