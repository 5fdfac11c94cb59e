use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global toast state - use `use_toasts()` to access.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.read();
        self.next_id.set(id + 1);
        self.entries.write().push(Toast { id, kind, message });
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts.entries.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in entries {
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: class,
                            span { class: "toast-message", "{toast.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| toasts.dismiss(id),
                                "\u{d7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
