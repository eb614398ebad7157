//! Signed-in users and their roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Password accepted for every demo account.
pub const DEMO_PASSWORD: &str = "demo123";

/// What a user is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Accounting-office staff: sees every client.
    Office,
    /// A client company: sees only its own records.
    Client,
}

impl UserRole {
    /// The other role.
    pub fn toggled(self) -> Self {
        match self {
            UserRole::Office => UserRole::Client,
            UserRole::Client => UserRole::Office,
        }
    }

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Office => "office",
            UserRole::Client => "client",
        }
    }

    /// Label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Office => "Office",
            UserRole::Client => "Client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user id.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Current role.
    pub role: UserRole,
    /// Company the user belongs to (client accounts only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

impl User {
    /// The demo office account.
    pub fn demo_office() -> Self {
        Self {
            id: "1".to_string(),
            email: "office@demo.com".to_string(),
            name: "Admin Contabilidade".to_string(),
            role: UserRole::Office,
            company_id: None,
        }
    }

    /// The demo client account.
    pub fn demo_client() -> Self {
        Self {
            id: "2".to_string(),
            email: "client@demo.com".to_string(),
            name: "Empresa Cliente Ltda".to_string(),
            role: UserRole::Client,
            company_id: Some("client-1".to_string()),
        }
    }

    /// Look up a demo account by email and check its password.
    pub fn authenticate(email: &str, password: &str) -> Option<Self> {
        if password != DEMO_PASSWORD {
            return None;
        }
        demo_users()
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    /// Copy of this user with a different role.
    pub fn with_role(&self, role: UserRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }
}

/// All demo accounts.
pub fn demo_users() -> Vec<User> {
    vec![User::demo_office(), User::demo_client()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_toggle() {
        assert_eq!(UserRole::Office.toggled(), UserRole::Client);
        assert_eq!(UserRole::Client.toggled(), UserRole::Office);
    }

    #[test]
    fn test_role_from_command_line() {
        use clap::ValueEnum;
        assert_eq!(UserRole::from_str("Office", true), Ok(UserRole::Office));
        assert_eq!(UserRole::from_str("client", false), Ok(UserRole::Client));
        assert!(UserRole::from_str("admin", true).is_err());
    }

    #[test]
    fn test_authenticate_success() {
        let user = User::authenticate("office@demo.com", DEMO_PASSWORD).unwrap();
        assert_eq!(user.role, UserRole::Office);
        assert!(user.company_id.is_none());
    }

    #[test]
    fn test_authenticate_case_insensitive_email() {
        let user = User::authenticate(" Client@Demo.com ", DEMO_PASSWORD).unwrap();
        assert_eq!(user.company_id.as_deref(), Some("client-1"));
    }

    #[test]
    fn test_authenticate_wrong_password() {
        assert!(User::authenticate("office@demo.com", "wrong").is_none());
    }

    #[test]
    fn test_authenticate_unknown_user() {
        assert!(User::authenticate("nobody@demo.com", DEMO_PASSWORD).is_none());
    }

    #[test]
    fn test_user_serialization() {
        let json = serde_json::to_string(&User::demo_client()).unwrap();
        assert!(json.contains("\"role\":\"client\""));
        assert!(json.contains("\"company_id\":\"client-1\""));

        let office = serde_json::to_string(&User::demo_office()).unwrap();
        assert!(!office.contains("company_id"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, User::demo_client());
    }
}
