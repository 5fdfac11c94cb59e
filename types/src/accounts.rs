use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Moderator, Role::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Moderator => "Moderator",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 2] = [AccountStatus::Active, AccountStatus::Inactive];

    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AccountStatus::Active => "badge badge-green",
            AccountStatus::Inactive => "badge badge-gray",
        }
    }
}

/// A site user as seen by the admin panel. Distinct from [`crate::Session`]:
/// these are managed rows, not login identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub joined: Date,
}

pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            id: 1,
            username: "johndoe".into(),
            email: "john@example.com".into(),
            role: Role::User,
            status: AccountStatus::Active,
            joined: date(2025, 3, 15),
        },
        Account {
            id: 2,
            username: "janedoe".into(),
            email: "jane@example.com".into(),
            role: Role::Admin,
            status: AccountStatus::Active,
            joined: date(2025, 2, 10),
        },
        Account {
            id: 3,
            username: "mikesmith".into(),
            email: "mike@example.com".into(),
            role: Role::User,
            status: AccountStatus::Inactive,
            joined: date(2025, 1, 5),
        },
        Account {
            id: 4,
            username: "sarahwilson".into(),
            email: "sarah@example.com".into(),
            role: Role::Moderator,
            status: AccountStatus::Active,
            joined: date(2025, 4, 1),
        },
    ]
}
