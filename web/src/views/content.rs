use dioxus::prelude::*;
use types::content::{ContentEntry, ContentStatus, sample_blog_posts, sample_pages, slugify};

use crate::toast::use_toasts;
use crate::views::components::{Modal, PageHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentTab {
    Pages,
    Blog,
}

impl ContentTab {
    fn noun(self) -> &'static str {
        match self {
            ContentTab::Pages => "Page",
            ContentTab::Blog => "Blog post",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct EditorState {
    /// `None` when creating a new entry.
    id: Option<u32>,
    title: String,
    slug: String,
    body: String,
    status: ContentStatus,
}

impl EditorState {
    fn blank() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            body: String::new(),
            status: ContentStatus::Draft,
        }
    }

    fn from_entry(entry: &ContentEntry) -> Self {
        Self {
            id: Some(entry.id),
            title: entry.title.clone(),
            slug: entry.slug.clone(),
            body: entry.body.clone(),
            status: entry.status,
        }
    }
}

#[component]
pub fn Content() -> Element {
    let mut toasts = use_toasts();
    let mut pages = use_signal(sample_pages);
    let mut blog = use_signal(sample_blog_posts);
    let mut tab = use_signal(|| ContentTab::Pages);
    let mut viewing = use_signal(|| None::<ContentEntry>);
    let mut editor = use_signal(|| None::<EditorState>);

    let active = move || match *tab.read() {
        ContentTab::Pages => pages,
        ContentTab::Blog => blog,
    };

    let mut save = move |state: EditorState| {
        if state.title.trim().is_empty() || state.body.trim().is_empty() {
            toasts.error("Please fill all required fields");
            return;
        }
        let noun = tab.read().noun();
        let mut entries = active();
        let mut entries = entries.write();
        match state.id {
            Some(id) => {
                if let Some(existing) = entries.iter_mut().find(|e| e.id == id) {
                    existing.title = state.title.clone();
                    existing.slug = state.slug.clone();
                    existing.body = state.body.clone();
                    existing.status = state.status;
                    existing.modified = jiff::Zoned::now().date();
                }
                toasts.success(format!("{noun} \"{}\" updated", state.title));
            }
            None => {
                let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
                entries.push(ContentEntry {
                    id,
                    title: state.title.clone(),
                    slug: state.slug.clone(),
                    body: state.body.clone(),
                    status: state.status,
                    modified: jiff::Zoned::now().date(),
                    author: "Admin".into(),
                });
                toasts.success(format!("{noun} \"{}\" created", state.title));
            }
        }
        drop(entries);
        editor.set(None);
    };

    let rows: Vec<ContentEntry> = active()();

    rsx! {
        div {
            PageHeader {
                title: "Content Management",
                subtitle: "Site pages and blog posts.",
            }

            div { class: "tab-bar",
                button {
                    class: if *tab.read() == ContentTab::Pages { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ContentTab::Pages),
                    "Pages"
                }
                button {
                    class: if *tab.read() == ContentTab::Blog { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(ContentTab::Blog),
                    "Blog Posts"
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title",
                        if *tab.read() == ContentTab::Pages { "Pages" } else { "Blog Posts" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editor.set(Some(EditorState::blank())),
                        {format!("+ New {}", tab.read().noun())}
                    }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Slug" }
                                th { "Author" }
                                th { "Status" }
                                th { "Modified" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "6", class: "cell-empty", "Nothing here yet." }
                                }
                            }
                            for entry in rows {
                                {
                                    let view_entry = entry.clone();
                                    let edit_state = EditorState::from_entry(&entry);
                                    let delete_id = entry.id;
                                    let delete_title = entry.title.clone();
                                    rsx! {
                                        tr { key: "{entry.id}",
                                            td { class: "cell-strong", "{entry.title}" }
                                            td { class: "cell-muted", "/{entry.slug}" }
                                            td { "{entry.author}" }
                                            td {
                                                span { class: entry.status.badge_class(), {entry.status.label()} }
                                            }
                                            td { "{entry.modified}" }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| viewing.set(Some(view_entry.clone())),
                                                        "View"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| editor.set(Some(edit_state.clone())),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost danger",
                                                        onclick: move |_| {
                                                            active().write().retain(|e| e.id != delete_id);
                                                            toasts.error(format!("\"{delete_title}\" deleted"));
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

            if let Some(entry) = viewing() {
                Modal {
                    title: "{entry.title}",
                    on_close: move |_| viewing.set(None),
                    p { class: "cell-muted", "/{entry.slug} \u{b7} by {entry.author} \u{b7} {entry.modified}" }
                    div { class: "content-preview", "{entry.body}" }
                    div { class: "modal-footer",
                        span { class: entry.status.badge_class(), {entry.status.label()} }
                    }
                }
            }

            if let Some(state) = editor() {
                {
                    let noun = tab.read().noun();
                    let title = if state.id.is_some() {
                        format!("Edit {noun}")
                    } else {
                        format!("New {noun}")
                    };
                    let submit_state = state.clone();
                    rsx! {
                        Modal {
                            title: "{title}",
                            wide: true,
                            on_close: move |_| editor.set(None),
                            div { class: "form-group",
                                label { class: "form-label", "Title" }
                                input {
                                    class: "form-input",
                                    value: "{state.title}",
                                    oninput: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.title = e.value();
                                            state.slug = slugify(&state.title);
                                        }
                                    },
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Slug" }
                                input {
                                    class: "form-input",
                                    value: "{state.slug}",
                                    oninput: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.slug = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Content" }
                                textarea {
                                    class: "form-input form-textarea",
                                    rows: "8",
                                    value: "{state.body}",
                                    oninput: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.body = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Status" }
                                select {
                                    class: "form-select",
                                    onchange: move |e| {
                                        if let Some(state) = editor.write().as_mut() {
                                            state.status = match e.value().as_str() {
                                                "Published" => ContentStatus::Published,
                                                _ => ContentStatus::Draft,
                                            };
                                        }
                                    },
                                    option {
                                        value: "Draft",
                                        selected: state.status == ContentStatus::Draft,
                                        "Draft"
                                    }
                                    option {
                                        value: "Published",
                                        selected: state.status == ContentStatus::Published,
                                        "Published"
                                    }
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
                                    "Save"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
