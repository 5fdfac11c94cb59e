use dioxus::prelude::*;

/// Overlay dialog. Clicking the backdrop closes it; clicks inside don't.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: if wide { "modal modal-wide" } else { "modal" },
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{d7}"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

#[component]
pub fn SearchInput(mut value: Signal<String>, placeholder: String) -> Element {
    rsx! {
        input {
            class: "form-input search-input",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |e| value.set(e.value()),
        }
    }
}

#[component]
pub fn PageHeader(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header-content",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}
