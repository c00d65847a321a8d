//! User model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, alias = "is_active")]
    pub is_active: bool,
    #[serde(default, alias = "is_confirmed")]
    pub is_confirmed: bool,
    #[serde(default, alias = "is_deleted")]
    pub is_deleted: bool,
    #[serde(default, alias = "profile_picture")]
    pub profile_picture: Option<String>,
}

impl User {
    pub fn can_organize(&self) -> bool {
        matches!(self.role, UserRole::Organizer | UserRole::Admin)
    }
}

/// Account role as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Organizer,
    Admin,
    Unknown(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::User => "user",
            UserRole::Organizer => "organizer",
            UserRole::Admin => "admin",
            UserRole::Unknown(other) => other,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "user" => UserRole::User,
            "organizer" => UserRole::Organizer,
            "admin" => UserRole::Admin,
            _ => UserRole::Unknown(s.to_string()),
        })
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": 42,
            "name": "Ada",
            "email": "ada@example.com",
            "role": "Organizer",
            "isActive": true,
            "isConfirmed": true,
            "profilePicture": "https://cdn.example.com/ada.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Organizer);
        assert!(user.is_active);
        assert!(user.is_confirmed);
        assert!(!user.is_deleted);
        assert!(user.can_organize());
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let json = r#"{"id": 1, "name": "Bob", "email": "bob@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_active);
        assert_eq!(user.profile_picture, None);
        assert!(!user.can_organize());
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let role: UserRole = serde_json::from_str(r#""moderator""#).unwrap();
        assert_eq!(role, UserRole::Unknown("moderator".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""moderator""#);
    }
}
