use serde::{Deserialize, Serialize};

/// Account role, as cached in the client session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Instructor,
    User,
    /// Any role string this client does not know about
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::User => "user",
            Role::Unknown => "unknown",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "super_admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "instructor" => Role::Instructor,
            "user" => Role::User,
            _ => Role::Unknown,
        }
    }

    /// Admins and super admins share the admin area
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
