//! Fixture loading.
//!
//! Reads the post fixtures that parameterize data-driven cases. Loaded
//! once at startup; a malformed or missing fixture aborts the run before
//! any case executes.

use std::path::Path;

use postcheck_domain::Post;
use tokio::fs;

/// Error type for fixture loading.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// IO error reading the fixture file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture file is not a valid JSON array of posts.
    #[error("invalid fixture data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the post fixtures from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// JSON array of post records.
pub async fn load_posts(path: &Path) -> Result<Vec<Post>, FixtureError> {
    let content = fs::read(path).await?;
    let posts = serde_json::from_slice(&content)?;
    Ok(posts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_posts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_data.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "userId": 1, "title": "first", "body": "first body"},
                {"id": 2, "userId": 7, "title": "second", "body": "second body"}
            ]"#,
        )
        .unwrap();

        let posts = load_posts(&path).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[1].user_id, 7);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load_posts(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_data.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let result = load_posts(&path).await;
        assert!(matches!(result, Err(FixtureError::Parse(_))));
    }
}
