use std::time::Duration;

use dioxus::prelude::*;

use crate::toast::use_toasts;
use crate::views::components::PageHeader;

const SAVE_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Security,
    Notifications,
}

#[component]
pub fn Settings() -> Element {
    let mut toasts = use_toasts();
    let mut tab = use_signal(|| SettingsTab::General);
    let mut saving = use_signal(|| false);

    // General
    let mut site_name = use_signal(|| "AstralAdmin".to_owned());
    let mut support_email = use_signal(|| "support@astral.com".to_owned());
    let mut tagline = use_signal(|| "Guidance written in the stars".to_owned());

    // Security
    let mut session_timeout = use_signal(|| "60".to_owned());
    let mut require_reset_question = use_signal(|| true);

    // Notifications
    let mut email_on_order = use_signal(|| true);
    let mut email_on_kundli = use_signal(|| true);
    let mut weekly_digest = use_signal(|| false);

    let mut save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            auth::latency::simulate(SAVE_DELAY).await;
            saving.set(false);
            toasts.success("Settings saved");
        });
    };

    let tab_class = move |t: SettingsTab| {
        if *tab.read() == t { "tab active" } else { "tab" }
    };

    rsx! {
        div {
            PageHeader {
                title: "Settings",
                subtitle: "Configure the admin panel.",
            }

            div { class: "tab-bar",
                button {
                    class: tab_class(SettingsTab::General),
                    onclick: move |_| tab.set(SettingsTab::General),
                    "General"
                }
                button {
                    class: tab_class(SettingsTab::Security),
                    onclick: move |_| tab.set(SettingsTab::Security),
                    "Security"
                }
                button {
                    class: tab_class(SettingsTab::Notifications),
                    onclick: move |_| tab.set(SettingsTab::Notifications),
                    "Notifications"
                }
            }

            div { class: "card",
                match *tab.read() {
                    SettingsTab::General => rsx! {
                        div { class: "form-group",
                            label { class: "form-label", "Site Name" }
                            input {
                                class: "form-input",
                                value: "{site_name}",
                                oninput: move |e| site_name.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Support Email" }
                            input {
                                class: "form-input",
                                r#type: "email",
                                value: "{support_email}",
                                oninput: move |e| support_email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Tagline" }
                            input {
                                class: "form-input",
                                value: "{tagline}",
                                oninput: move |e| tagline.set(e.value()),
                            }
                        }
                    },
                    SettingsTab::Security => rsx! {
                        div { class: "form-group",
                            label { class: "form-label", "Session Timeout (minutes)" }
                            input {
                                class: "form-input",
                                r#type: "number",
                                value: "{session_timeout}",
                                oninput: move |e| session_timeout.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "toggle-row",
                                input {
                                    r#type: "checkbox",
                                    checked: require_reset_question(),
                                    onchange: move |e| require_reset_question.set(e.checked()),
                                }
                                "Require security question for password resets"
                            }
                        }
                    },
                    SettingsTab::Notifications => rsx! {
                        div { class: "form-group",
                            label { class: "toggle-row",
                                input {
                                    r#type: "checkbox",
                                    checked: email_on_order(),
                                    onchange: move |e| email_on_order.set(e.checked()),
                                }
                                "Email me when a new order arrives"
                            }
                        }
                        div { class: "form-group",
                            label { class: "toggle-row",
                                input {
                                    r#type: "checkbox",
                                    checked: email_on_kundli(),
                                    onchange: move |e| email_on_kundli.set(e.checked()),
                                }
                                "Email me when a kundli request arrives"
                            }
                        }
                        div { class: "form-group",
                            label { class: "toggle-row",
                                input {
                                    r#type: "checkbox",
                                    checked: weekly_digest(),
                                    onchange: move |e| weekly_digest.set(e.checked()),
                                }
                                "Send a weekly revenue digest"
                            }
                        }
                    },
                }

                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: move |e: MouseEvent| save(e),
                        if saving() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
