//! User records and the pure helpers over them.
//!
//! Records have named, typed fields: a document that omits a field fails to
//! deserialize rather than passing an arbitrary shape through.

use serde::{Deserialize, Serialize};

/// A single user record as persisted in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Positive integer, unique within the store, assigned at creation and
    /// never reassigned or reused.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Single-line postal address.
    pub address: String,
    /// Phone number.
    pub phone: String,
}

impl User {
    /// Combine creatable fields with an assigned id.
    pub fn from_new(id: u64, new: NewUser) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
            phone: new.phone,
        }
    }
}

/// The creatable fields of a user, before an id is assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Single-line postal address.
    pub address: String,
    /// Phone number.
    pub phone: String,
}

/// Next identifier for a store with the given records.
///
/// Returns `len + 1`. Not collision-safe under concurrent writers or after
/// deletions; neither occurs in this system, so the scheme is kept and the
/// limitation documented rather than worked around.
pub fn next_id(records: &[User]) -> u64 {
    records.len() as u64 + 1
}

/// First record whose id matches, or `None`.
///
/// Linear scan; the list is expected to stay small.
pub fn find_by_id(records: &[User], id: u64) -> Option<&User> {
    records.iter().find(|u| u.id == id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "1 Test Rd, Testville, TS 00001".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_nonempty() {
        let records = vec![sample(1, "Alice"), sample(2, "Bob"), sample(3, "Carol")];
        assert_eq!(next_id(&records), 4);
    }

    #[test]
    fn test_find_by_id_present() {
        let records = vec![sample(1, "Alice"), sample(2, "Bob")];
        let found = find_by_id(&records, 2).unwrap();
        assert_eq!(found.name, "Bob");
    }

    #[test]
    fn test_find_by_id_absent() {
        let records = vec![sample(1, "Alice")];
        assert!(find_by_id(&records, 99).is_none());
    }

    #[test]
    fn test_find_by_id_empty() {
        assert!(find_by_id(&[], 1).is_none());
    }

    #[test]
    fn test_user_from_new() {
        let new = NewUser {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            address: "2 Elm St".to_string(),
            phone: "555-0101".to_string(),
        };
        let user = User::from_new(7, new);
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Dana");
        assert_eq!(user.email, "dana@example.com");
    }

    #[test]
    fn test_user_serde_round_trip() {
        let user = sample(1, "Alice");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_rejects_missing_fields() {
        // Missing fields are a deserialization error, not defaulted.
        let result: Result<User, _> = serde_json::from_str(r#"{"id": 1, "name": "Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_field_order_in_json() {
        let user = sample(1, "Alice");
        let json = serde_json::to_string(&user).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        assert!(id_pos < name_pos);
    }
}
