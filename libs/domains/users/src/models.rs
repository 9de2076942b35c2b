use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest e-mail the `users` table accepts
pub const EMAIL_MAX_LENGTH: usize = 50;

/// A user record, as stored and as exchanged over HTTP.
///
/// Absent JSON fields fall back to their defaults: `0` for the id and an
/// empty string for the text fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Client-chosen identifier
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[schema(max_length = 50, example = "jane@example.com")]
    pub email: String,
}

impl User {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new(1, "Jane", "Doe", "jane@example.com");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com"
            })
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let user: User = serde_json::from_value(json!({ "firstName": "Jane" })).unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let user: User =
            serde_json::from_value(json!({ "id": 3, "email": "a@b.co", "role": "admin" }))
                .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "a@b.co");
    }
}
