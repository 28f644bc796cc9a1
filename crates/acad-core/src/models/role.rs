use std::fmt;

use serde::{Deserialize, Serialize};

/// Back-office role as reported by the server.
///
/// Unknown roles are kept verbatim so a newer server does not break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    Admission,
    Accountant,
    #[default]
    Employee,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Admission => "admission",
            Self::Accountant => "accountant",
            Self::Employee => "employee",
            Self::Other(value) => value,
        }
    }

    /// Admins and managers see every task and can distribute leads
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }

    /// Roles allowed on the admissions pages
    pub fn can_manage_admissions(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager | Self::Admission)
    }

    /// Roles allowed to collect fees
    pub fn can_collect_fees(&self) -> bool {
        matches!(self, Self::Admin | Self::Accountant | Self::Admission)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            "admission" => Self::Admission,
            "accountant" => Self::Accountant,
            "employee" => Self::Employee,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
