use dioxus::prelude::*;

mod session;
mod toast;
mod views;

use session::{Auth, use_auth};
use toast::{ToastHost, Toasts};
use views::{
    Accounts, Content, Dashboard, Home, Horoscopes, Kundli, Orders, Payments, Settings,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(AdminLayout)]
        #[route("/admin")]
        Dashboard {},
        #[route("/admin/orders")]
        Orders {},
        #[route("/admin/horoscopes")]
        Horoscopes {},
        #[route("/admin/kundli")]
        Kundli {},
        #[route("/admin/accounts")]
        Accounts {},
        #[route("/admin/content")]
        Content {},
        #[route("/admin/payments")]
        Payments {},
        #[route("/admin/settings")]
        Settings {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let toasts = use_context_provider(Toasts::new);
    use_context_provider(|| Auth::new(toasts));

    rsx! {
        document::Title { "Astral Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        ToastHost {}
        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AdminLayout() -> Element {
    let mut auth = use_auth();

    match auth.current() {
        Some(session) => {
            let initial = session
                .username
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();
            let role = if session.is_admin { "Administrator" } else { "Member" };

            rsx! {
                div { class: "app-layout",
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "\u{2728}" }
                            span { class: "sidebar-brand", "Astral Admin" }
                        }
                        nav { class: "sidebar-nav",
                            span { class: "sidebar-group-label", "Main" }
                            NavLink { to: Route::Dashboard {}, "Dashboard" }
                            NavLink { to: Route::Orders {}, "Orders" }
                            NavLink { to: Route::Horoscopes {}, "Horoscopes" }
                            NavLink { to: Route::Kundli {}, "Kundli Requests" }

                            span { class: "sidebar-group-label", "Management" }
                            NavLink { to: Route::Accounts {}, "Users" }
                            NavLink { to: Route::Content {}, "Content" }
                            NavLink { to: Route::Payments {}, "Payments" }

                            span { class: "sidebar-group-label", "System" }
                            NavLink { to: Route::Settings {}, "Settings" }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{session.username}" }
                                    div { class: "sidebar-user-role", "{role}" }
                                }
                            }
                            button {
                                class: "sidebar-logout",
                                onclick: move |_| {
                                    auth.logout();
                                    navigator().push(Route::Home {});
                                },
                                "Sign out"
                            }
                        }
                    }
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
        None => {
            let nav = navigator();
            nav.push(Route::Home {});
            rsx! {
                div { class: "loading", "Redirecting to the portal..." }
            }
        }
    }
}
