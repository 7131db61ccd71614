//! Pure payload validation. Each validator walks the whole payload and
//! collects every violation instead of stopping at the first.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Full user payload, required on both create and update (no partial
/// update semantics).
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub teamid: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub users: Vec<i32>,
}

pub fn validate_user(payload: &UserPayload) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if payload.name.is_empty() {
        errors.push("Name cannot be empty".to_string());
    } else if payload.name.chars().count() > 50 {
        errors.push("Name must be at most 50 characters".to_string());
    }

    if !EMAIL_RE.is_match(&payload.email) {
        errors.push("Email must be a valid email".to_string());
    }

    if payload.password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters".to_string());
    }

    if payload.role != "member" && payload.role != "admin" {
        errors.push("Role must be either 'member' or 'admin'".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn validate_team(payload: &TeamPayload) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if payload.name.is_empty() {
        errors.push("Team name cannot be empty".to_string());
    } else if payload.name.chars().count() > 100 {
        errors.push("Team name must be at most 100 characters".to_string());
    }

    if payload.users.is_empty() {
        errors.push("At least one user is required in the team".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, password: &str, role: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            teamid: None,
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(validate_user(&user("Alice", "alice@example.com", "secret1", "admin")).is_ok());
        assert!(validate_user(&user("Bob", "bob@example.com", "secret1", "member")).is_ok());
    }

    #[test]
    fn invalid_user_collects_all_errors() {
        let errors = validate_user(&user("", "bad-email", "short", "owner")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("Name")));
        assert!(errors.iter().any(|e| e.contains("valid email")));
        assert!(errors.iter().any(|e| e.contains("at least 6")));
        assert!(errors.iter().any(|e| e.contains("Role")));
    }

    #[test]
    fn user_name_length_boundary() {
        let ok = "a".repeat(50);
        assert!(validate_user(&user(&ok, "a@b.co", "secret1", "member")).is_ok());

        let long = "a".repeat(51);
        let errors = validate_user(&user(&long, "a@b.co", "secret1", "member")).unwrap_err();
        assert_eq!(errors, vec!["Name must be at most 50 characters"]);
    }

    #[test]
    fn email_syntax() {
        for bad in ["", "bad-email", "a@b", "a b@c.com", "@x.com"] {
            let errors = validate_user(&user("A", bad, "secret1", "member")).unwrap_err();
            assert_eq!(errors, vec!["Email must be a valid email"], "email: {bad}");
        }
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_user(&user("A", "a@b.co", "secre1", "member")).is_ok());
        let errors = validate_user(&user("A", "a@b.co", "secr1", "member")).unwrap_err();
        assert_eq!(errors, vec!["Password must be at least 6 characters"]);
    }

    fn team(name: &str, users: Vec<i32>) -> TeamPayload {
        TeamPayload {
            name: name.to_string(),
            description: None,
            users,
        }
    }

    #[test]
    fn valid_team_passes() {
        assert!(validate_team(&team("Eng", vec![1])).is_ok());
        // Empty description is allowed.
        let mut t = team("Eng", vec![1, 2]);
        t.description = Some(String::new());
        assert!(validate_team(&t).is_ok());
    }

    #[test]
    fn team_requires_name_and_members() {
        let errors = validate_team(&team("", vec![])).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Team name cannot be empty",
                "At least one user is required in the team"
            ]
        );
    }

    #[test]
    fn team_name_length_boundary() {
        assert!(validate_team(&team(&"a".repeat(100), vec![1])).is_ok());
        let errors = validate_team(&team(&"a".repeat(101), vec![1])).unwrap_err();
        assert_eq!(errors, vec!["Team name must be at most 100 characters"]);
    }
}
