use dioxus::prelude::*;
use types::SECURITY_QUESTION;

use crate::Route;
use crate::session::use_auth;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut show_modal = use_signal(|| false);

    if auth.current().is_some() {
        let nav = navigator();
        nav.push(Route::Dashboard {});
        return rsx! {
            div { class: "loading", "Entering the cosmos..." }
        };
    }

    rsx! {
        div { class: "portal-page",
            div { class: "portal-hero",
                div { class: "portal-emblem", "\u{2728}" }
                h1 { class: "portal-title", "Astral Admin Portal" }
                p { class: "portal-subtitle",
                    "Enter the cosmic realm to manage your celestial dashboard."
                }
                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| show_modal.set(true),
                    "Access Portal"
                }
            }

            if *show_modal.read() {
                AuthModal { on_close: move |_| show_modal.set(false) }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
    Reset,
}

/// Login / register / password-reset dialog. The submit buttons disable while
/// a request is outstanding; only one auth operation is ever in flight.
#[component]
fn AuthModal(on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| AuthTab::Login);

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut security_answer = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut submitting = use_signal(|| false);
    // Caller-side validation problems (password length, mismatch). Auth
    // failures arrive as toasts instead.
    let mut form_error = use_signal(|| None::<&'static str>);

    let select_tab = move |next: AuthTab| {
        let mut tab = tab;
        let mut form_error = form_error;
        move |_: MouseEvent| {
            tab.set(next);
            form_error.set(None);
        }
    };

    let submit_login = {
        let auth = auth.clone();
        move |_| {
            let mut auth = auth.clone();
            let email = email.read().clone();
            let password = password.read().clone();
            spawn(async move {
                submitting.set(true);
                if auth.login(&email, &password).await.is_ok() {
                    on_close.call(());
                    navigator().push(Route::Dashboard {});
                }
                submitting.set(false);
            });
        }
    };

    let submit_register = {
        let auth = auth.clone();
        move |_| {
            if username.read().trim().is_empty() || email.read().trim().is_empty() {
                form_error.set(Some("Please fill all required fields"));
                return;
            }
            if password.read().len() < MIN_PASSWORD_LEN {
                form_error.set(Some("Password must be at least 6 characters"));
                return;
            }
            form_error.set(None);

            let mut auth = auth.clone();
            let email = email.read().clone();
            let password = password.read().clone();
            let username = username.read().clone();
            spawn(async move {
                submitting.set(true);
                if auth.register(&email, &password, &username).await.is_ok() {
                    on_close.call(());
                    navigator().push(Route::Dashboard {});
                }
                submitting.set(false);
            });
        }
    };

    let submit_reset = {
        let auth = auth.clone();
        move |_| {
            if *new_password.read() != *confirm_password.read() {
                form_error.set(Some("Passwords do not match"));
                return;
            }
            if new_password.read().len() < MIN_PASSWORD_LEN {
                form_error.set(Some("Password must be at least 6 characters"));
                return;
            }
            form_error.set(None);

            let mut auth = auth.clone();
            let email = email.read().clone();
            let new_password_value = new_password.read().clone();
            let answer = security_answer.read().clone();
            spawn(async move {
                submitting.set(true);
                if auth
                    .reset_password(&email, &new_password_value, &answer)
                    .await
                    .is_ok()
                {
                    tab.set(AuthTab::Login);
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    security_answer.set(String::new());
                }
                submitting.set(false);
            });
        }
    };

    let busy = *submitting.read();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal auth-modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "auth-modal-header",
                    div { class: "auth-modal-emblem", "\u{2728}" }
                    h2 { class: "auth-modal-title", "Cosmic Access Portal" }
                }

                div { class: "tab-bar",
                    button {
                        class: if *tab.read() == AuthTab::Login { "tab active" } else { "tab" },
                        onclick: select_tab(AuthTab::Login),
                        "Login"
                    }
                    button {
                        class: if *tab.read() == AuthTab::Register { "tab active" } else { "tab" },
                        onclick: select_tab(AuthTab::Register),
                        "Register"
                    }
                    button {
                        class: if *tab.read() == AuthTab::Reset { "tab active" } else { "tab" },
                        onclick: select_tab(AuthTab::Reset),
                        "Reset Password"
                    }
                }

                if let Some(message) = *form_error.read() {
                    div { class: "alert alert-error", "{message}" }
                }

                match *tab.read() {
                    AuthTab::Login => rsx! {
                        div { class: "form-group",
                            label { class: "form-label", r#for: "email", "Email Address" }
                            input {
                                id: "email",
                                class: "form-input",
                                r#type: "email",
                                placeholder: "cosmic.traveler@astral.com",
                                disabled: busy,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "password", "Password" }
                            input {
                                id: "password",
                                class: "form-input",
                                r#type: "password",
                                disabled: busy,
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            disabled: busy,
                            onclick: submit_login,
                            if busy { "Connecting..." } else { "Enter the Cosmos" }
                        }
                    },
                    AuthTab::Register => rsx! {
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reg-username", "Username" }
                            input {
                                id: "reg-username",
                                class: "form-input",
                                r#type: "text",
                                placeholder: "Star Gazer",
                                disabled: busy,
                                value: "{username}",
                                oninput: move |e| username.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reg-email", "Email Address" }
                            input {
                                id: "reg-email",
                                class: "form-input",
                                r#type: "email",
                                disabled: busy,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reg-password", "Password" }
                            input {
                                id: "reg-password",
                                class: "form-input",
                                r#type: "password",
                                disabled: busy,
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            disabled: busy,
                            onclick: submit_register,
                            if busy { "Creating account..." } else { "Begin the Journey" }
                        }
                    },
                    AuthTab::Reset => rsx! {
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reset-email", "Email Address" }
                            input {
                                id: "reset-email",
                                class: "form-input",
                                r#type: "email",
                                disabled: busy,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "security-answer", "{SECURITY_QUESTION}" }
                            input {
                                id: "security-answer",
                                class: "form-input",
                                r#type: "text",
                                disabled: busy,
                                value: "{security_answer}",
                                oninput: move |e| security_answer.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "new-password", "New Password" }
                            input {
                                id: "new-password",
                                class: "form-input",
                                r#type: "password",
                                disabled: busy,
                                value: "{new_password}",
                                oninput: move |e| new_password.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "confirm-password", "Confirm Password" }
                            input {
                                id: "confirm-password",
                                class: "form-input",
                                r#type: "password",
                                disabled: busy,
                                value: "{confirm_password}",
                                oninput: move |e| confirm_password.set(e.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            disabled: busy,
                            onclick: submit_reset,
                            if busy { "Consulting the stars..." } else { "Reset Password" }
                        }
                    },
                }
            }
        }
    }
}
