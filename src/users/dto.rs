use serde::{Deserialize, Serialize};

use crate::users::repo::User;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Book,
}

/// Request body for user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response returned after creating a user.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: i64,
    pub name: String,
}

/// Public snapshot of a user as stored in the side-cache under `user:<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSnapshot {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub item_type: ItemType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Ids below 1000 are active, the rest inactive. Negative ids are rejected
/// before this is ever consulted.
pub fn status_for_id(id: i64) -> UserStatus {
    if id > 0 && id < 1000 {
        UserStatus::Active
    } else {
        UserStatus::Inactive
    }
}

impl UserSnapshot {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            status: status_for_id(user.id),
            item_type: ItemType::Book,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn status_thresholds() {
        assert_eq!(status_for_id(1), UserStatus::Active);
        assert_eq!(status_for_id(999), UserStatus::Active);
        assert_eq!(status_for_id(1000), UserStatus::Inactive);
        assert_eq!(status_for_id(5_000_000), UserStatus::Inactive);
    }

    #[test]
    fn snapshot_serializes_with_lowercase_tags() {
        let user = User {
            id: 42,
            name: "John".into(),
            email: "john@x.com".into(),
            password_hash: "hash".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(UserSnapshot::from_user(&user)).unwrap();
        assert_eq!(json["user_id"], 42);
        assert_eq!(json["status"], "active");
        assert_eq!(json["item_type"], "book");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn snapshot_roundtrips_through_cache_encoding() {
        let snap = UserSnapshot {
            user_id: 1500,
            name: "Jane".into(),
            email: "jane@x.com".into(),
            status: status_for_id(1500),
            item_type: ItemType::Book,
        };
        let raw = serde_json::to_string(&snap).unwrap();
        let back: UserSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, snap);
        assert_eq!(back.status, UserStatus::Inactive);
    }

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 10);
    }
}
