// Record types sent to the API. They carry no behavior beyond serde:
// required fields are plain values, everything else is an `Option` that
// is left out of the payload when unset.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user account. `company` and `address` stay as loose JSON because the
/// remote API returns nested objects for them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// A comment left on a post by `name`/`email`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub name: String,
    pub email: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
}

/// Anything that can be sent as a create/update payload.
pub trait Record {
    fn to_json(&self) -> Value;
}

// Serializing plain structs with string keys into a `Value` cannot fail.
macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn to_json(&self) -> Value {
                serde_json::to_value(self).unwrap_or(Value::Null)
            }
        })*
    };
}

impl_record!(User, Post, Comment);

impl Record for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_uses_camel_case_and_skips_unset_fields() {
        let post = Post {
            title: "title".into(),
            body: "body".into(),
            id: None,
            user_id: Some(5),
        };
        assert_eq!(
            post.to_json(),
            json!({"title": "title", "body": "body", "userId": 5})
        );
    }

    #[test]
    fn comment_serializes_post_id() {
        let comment = Comment {
            name: "n".into(),
            email: "e@x.io".into(),
            body: "b".into(),
            id: None,
            post_id: Some(1),
        };
        let json = comment.to_json();
        assert_eq!(json["postId"], 1);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn user_decodes_nested_api_payload() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {"street": "Victor Plains", "city": "Wisokyburgh"},
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": {"name": "Deckow-Crist"}
        }))
        .unwrap();
        assert_eq!(user.id, Some(2));
        assert_eq!(user.address.unwrap()["city"], "Wisokyburgh");
        assert_eq!(user.company.unwrap()["name"], "Deckow-Crist");
    }

    #[test]
    fn user_requires_name_username_and_email() {
        let result: Result<User, _> = serde_json::from_value(json!({"name": "only"}));
        assert!(result.is_err());
    }
}
