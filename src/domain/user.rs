//! User domain entity and its validation rules.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::config::REQUIRED_USER_FIELDS;
use crate::errors::{AppError, AppResult};

/// User record held by the registry.
///
/// Every field is optional on input and defaults to its zero value, so a
/// body without `id` decodes with `id == 0`; an explicit `null` is treated
/// the same as a missing field. All fields are always present
/// on output, `address` included when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct User {
    /// Unique user identifier (must be greater than 0 on create)
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 1)]
    pub id: u32,
    /// Login name
    #[validate(length(min = 1, message = "username is required"))]
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "jdoe")]
    pub username: String,
    /// Password, stored and returned as given
    #[validate(length(min = 1, message = "password is required"))]
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "s3cret")]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Free-form postal address
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "221B Baker Street")]
    pub address: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: u32,
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Check that username, password and name are present.
    ///
    /// Address is optional and never checked.
    pub fn check_required(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::bad_request(describe_missing(&e)))
    }

    /// Return this record re-keyed to `id`.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Decode a field, mapping `null` to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Join validation messages in the order the fields are declared.
fn describe_missing(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    REQUIRED_USER_FIELDS
        .iter()
        .filter_map(|field| {
            field_errors
                .iter()
                .find(|(name, _)| **name == *field)
                .map(|(_, errs)| (*field, *errs))
        })
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is required", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_on_decode() {
        let user: User = serde_json::from_str(r#"{"username":"a"}"#).unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.username, "a");
        assert!(user.password.is_empty());
        assert!(user.address.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_zero_values() {
        let user: User =
            serde_json::from_str(r#"{"id":null,"username":null,"name":"A","address":null}"#)
                .unwrap();

        assert_eq!(user, User::new(0, "", "", "A", ""));
    }

    #[test]
    fn test_negative_id_rejected_on_decode() {
        let result = serde_json::from_str::<User>(r#"{"id":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_encoding_keeps_every_field() {
        let user = User::new(1, "a", "p", "A", "");
        let json = serde_json::to_string(&user).unwrap();

        assert_eq!(
            json,
            r#"{"id":1,"username":"a","password":"p","name":"A","address":""}"#
        );
    }

    #[test]
    fn test_check_required_accepts_empty_address() {
        let user = User::new(1, "a", "p", "A", "");
        assert!(user.check_required().is_ok());
    }

    #[test]
    fn test_check_required_names_single_field() {
        let user = User::new(1, "a", "", "A", "x");
        let err = user.check_required().unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn test_check_required_orders_fields() {
        let user = User::new(1, "", "", "", "");
        let err = user.check_required().unwrap_err();

        assert_eq!(
            err.to_string(),
            "username is required, password is required, name is required"
        );
    }

    #[test]
    fn test_with_id() {
        let user = User::new(0, "a", "p", "A", "").with_id(42);
        assert_eq!(user.id, 42);
    }
}
