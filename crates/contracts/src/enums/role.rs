use serde::{Deserialize, Serialize};

/// Membership role inside an establishment.
///
/// `Padrino` is the cross-tenant super-admin; every other role is scoped
/// to the establishments the user is a member of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Padrino,
    Owner,
    Admin,
    Manager,
    Staff,
    Accountant,
}

impl Role {
    /// Wire code used by the REST API
    pub fn code(&self) -> &'static str {
        match self {
            Role::Padrino => "padrino",
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Accountant => "accountant",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Padrino => "Padrino",
            Role::Owner => "Owner",
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Accountant => "Accountant",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::Padrino,
            Role::Owner,
            Role::Admin,
            Role::Manager,
            Role::Staff,
            Role::Accountant,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "padrino" => Some(Role::Padrino),
            "owner" => Some(Role::Owner),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "staff" => Some(Role::Staff),
            "accountant" => Some(Role::Accountant),
            _ => None,
        }
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
