//! Fixture records for data-driven cases.

use serde::{Deserialize, Serialize};

/// A post record as served by the upstream API and stored in fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post id.
    pub id: u64,
    /// Owning user id.
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Title text.
    pub title: String,
    /// Body text.
    pub body: String,
}

impl Post {
    /// JSON body representation used by update requests.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "userId": self.user_id,
            "title": self.title,
            "body": self.body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_upstream_shape() {
        let post: Post = serde_json::from_str(
            r#"{"id": 2, "userId": 7, "title": "qui est esse", "body": "est rerum"}"#,
        )
        .unwrap();

        assert_eq!(post.id, 2);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "qui est esse");
    }

    #[test]
    fn test_to_body_round_trips_fields() {
        let post = Post {
            id: 2,
            user_id: 7,
            title: "qui est esse".to_string(),
            body: "est rerum".to_string(),
        };

        let body = post.to_body();
        assert_eq!(body["id"], 2);
        assert_eq!(body["userId"], 7);
        assert_eq!(body["title"], "qui est esse");
        assert_eq!(body["body"], "est rerum");
    }
}
