use super::zone::ZoneId;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Staff,
    Supervisor,
    Admin,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "staff" => Some(Role::Staff),
            "supervisor" => Some(Role::Supervisor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Helper: parse a role typed on the command line (any case).
    pub fn parse(s: &str) -> AppResult<Self> {
        Role::from_db_str(&s.trim().to_lowercase()).ok_or_else(|| AppError::InvalidRole(s.into()))
    }
}

/// Employee profile.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: Role,
    pub status: String,
    pub employee_number: String,
    pub zone_id: Option<ZoneId>,
    pub created_at: String,
}

impl User {
    /// "First Last" when both names are known, otherwise the email,
    /// otherwise "Unknown".
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if !first.is_empty() && !last.is_empty() {
            format!("{first} {last}")
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            "Unknown".to_string()
        }
    }
}
