use dioxus::prelude::*;
use types::accounts::{Account, AccountStatus, Role, sample_accounts};

use crate::toast::use_toasts;
use crate::views::components::{Modal, PageHeader, SearchInput};

#[derive(Debug, Clone, PartialEq)]
struct AccountForm {
    /// `None` when creating a new account.
    id: Option<u32>,
    username: String,
    email: String,
    role: Role,
    status: AccountStatus,
}

impl AccountForm {
    fn blank() -> Self {
        Self {
            id: None,
            username: String::new(),
            email: String::new(),
            role: Role::User,
            status: AccountStatus::Active,
        }
    }

    fn from_account(account: &Account) -> Self {
        Self {
            id: Some(account.id),
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role,
            status: account.status,
        }
    }
}

fn parse_role(value: &str) -> Role {
    match value {
        "Admin" => Role::Admin,
        "Moderator" => Role::Moderator,
        _ => Role::User,
    }
}

#[component]
pub fn Accounts() -> Element {
    let mut toasts = use_toasts();
    let mut accounts = use_signal(sample_accounts);
    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| None::<Role>);
    let mut status_filter = use_signal(|| None::<AccountStatus>);
    let mut viewing = use_signal(|| None::<Account>);
    let mut form = use_signal(|| None::<AccountForm>);

    let mut save = move |state: AccountForm| {
        if state.username.trim().is_empty() || state.email.trim().is_empty() {
            toasts.error("Please fill all required fields");
            return;
        }

        let mut accounts = accounts.write();
        match state.id {
            Some(id) => {
                if let Some(existing) = accounts.iter_mut().find(|a| a.id == id) {
                    existing.username = state.username.clone();
                    existing.email = state.email.clone();
                    existing.role = state.role;
                    existing.status = state.status;
                }
                toasts.success(format!("User {} updated", state.username));
            }
            None => {
                let id = accounts.len() as u32 + 1;
                accounts.push(Account {
                    id,
                    username: state.username.clone(),
                    email: state.email,
                    role: state.role,
                    status: state.status,
                    joined: jiff::Zoned::now().date(),
                });
                toasts.success(format!("User {} created", state.username));
            }
        }
        drop(accounts);
        form.set(None);
    };

    let query = search.read().to_lowercase();
    let rows: Vec<Account> = accounts
        .read()
        .iter()
        .filter(|a| {
            (*role_filter.read()).is_none_or(|r| a.role == r)
                && (*status_filter.read()).is_none_or(|s| a.status == s)
                && (query.is_empty()
                    || a.username.to_lowercase().contains(&query)
                    || a.email.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    rsx! {
        div {
            PageHeader {
                title: "User Management",
                subtitle: "Review and manage every registered account.",
            }

            div { class: "card",
                div { class: "card-header",
                    SearchInput { value: search, placeholder: "Search by username or email..." }
                    div { class: "filter-row",
                        select {
                            class: "form-select",
                            onchange: move |e| {
                                role_filter.set(match e.value().as_str() {
                                    "User" => Some(Role::User),
                                    "Moderator" => Some(Role::Moderator),
                                    "Admin" => Some(Role::Admin),
                                    _ => None,
                                });
                            },
                            option { value: "all", "All Roles" }
                            for role in Role::ALL {
                                option { value: role.label(), {role.label()} }
                            }
                        }
                        select {
                            class: "form-select",
                            onchange: move |e| {
                                status_filter.set(match e.value().as_str() {
                                    "Active" => Some(AccountStatus::Active),
                                    "Inactive" => Some(AccountStatus::Inactive),
                                    _ => None,
                                });
                            },
                            option { value: "all", "All Statuses" }
                            for status in AccountStatus::ALL {
                                option { value: status.label(), {status.label()} }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| form.set(Some(AccountForm::blank())),
                            "+ Add User"
                        }
                    }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Username" }
                                th { "Email" }
                                th { "Role" }
                                th { "Status" }
                                th { "Joined" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "6", class: "cell-empty", "No users match your filters." }
                                }
                            }
                            for account in rows {
                                {
                                    let view_account = account.clone();
                                    let edit_form = AccountForm::from_account(&account);
                                    let delete_id = account.id;
                                    let delete_name = account.username.clone();
                                    rsx! {
                                        tr { key: "{account.id}",
                                            td { class: "cell-strong", "{account.username}" }
                                            td { "{account.email}" }
                                            td { {account.role.label()} }
                                            td {
                                                span { class: account.status.badge_class(), {account.status.label()} }
                                            }
                                            td { "{account.joined}" }
                                            td {
                                                div { class: "row-actions",
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| viewing.set(Some(view_account.clone())),
                                                        "View"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost",
                                                        onclick: move |_| form.set(Some(edit_form.clone())),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost danger",
                                                        onclick: move |_| {
                                                            accounts.write().retain(|a| a.id != delete_id);
                                                            toasts.error(format!("User {delete_name} deleted"));
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

            if let Some(account) = viewing() {
                Modal {
                    title: "User Details",
                    on_close: move |_| viewing.set(None),
                    dl { class: "detail-list",
                        div { class: "detail-row",
                            dt { "Username" }
                            dd { "{account.username}" }
                        }
                        div { class: "detail-row",
                            dt { "Email" }
                            dd { "{account.email}" }
                        }
                        div { class: "detail-row",
                            dt { "Role" }
                            dd { {account.role.label()} }
                        }
                        div { class: "detail-row",
                            dt { "Status" }
                            dd {
                                span { class: account.status.badge_class(), {account.status.label()} }
                            }
                        }
                        div { class: "detail-row",
                            dt { "Joined" }
                            dd { "{account.joined}" }
                        }
                    }
                }
            }

            if let Some(state) = form() {
                {
                    let title = if state.id.is_some() { "Edit User" } else { "Add User" };
                    let submit_state = state.clone();
                    rsx! {
                        Modal {
                            title: "{title}",
                            on_close: move |_| form.set(None),
                            div { class: "form-group",
                                label { class: "form-label", "Username" }
                                input {
                                    class: "form-input",
                                    value: "{state.username}",
                                    oninput: move |e| {
                                        if let Some(state) = form.write().as_mut() {
                                            state.username = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "form-group",
                                label { class: "form-label", "Email" }
                                input {
                                    class: "form-input",
                                    r#type: "email",
                                    value: "{state.email}",
                                    oninput: move |e| {
                                        if let Some(state) = form.write().as_mut() {
                                            state.email = e.value();
                                        }
                                    },
                                }
                            }
                            div { class: "grid grid-cols-2",
                                div { class: "form-group",
                                    label { class: "form-label", "Role" }
                                    select {
                                        class: "form-select",
                                        onchange: move |e| {
                                            if let Some(state) = form.write().as_mut() {
                                                state.role = parse_role(&e.value());
                                            }
                                        },
                                        for role in Role::ALL {
                                            option { value: role.label(), selected: state.role == role, {role.label()} }
                                        }
                                    }
                                }
                                div { class: "form-group",
                                    label { class: "form-label", "Status" }
                                    select {
                                        class: "form-select",
                                        onchange: move |e| {
                                            if let Some(state) = form.write().as_mut() {
                                                state.status = match e.value().as_str() {
                                                    "Inactive" => AccountStatus::Inactive,
                                                    _ => AccountStatus::Active,
                                                };
                                            }
                                        },
                                        for status in AccountStatus::ALL {
                                            option {
                                                value: status.label(),
                                                selected: state.status == status,
                                                {status.label()}
                                            }
                                        }
                                    }
                                }
                            }
                            div { class: "modal-footer",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| form.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| save(submit_state.clone()),
                                    "Save User"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
