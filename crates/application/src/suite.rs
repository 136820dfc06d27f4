//! The smoke-suite catalog.
//!
//! Sixteen cases covering GET/POST/PATCH/PUT/DELETE against the posts
//! resource of the upstream API. Accepted-status sets and body payloads
//! follow the upstream's documented contract, including its quirks (404
//! for non-numeric ids, 500 for a PUT against an unknown id).

use postcheck_domain::{Check, Post, RequestSpec, StatusExpectation, TestCase};
use serde_json::json;
use url::Url;

use crate::error::{ApplicationError, ApplicationResult};

/// Index of the fixture record driving the valid-PUT case.
const PUT_FIXTURE_INDEX: usize = 1;

/// Builds the full smoke suite against `base`.
///
/// URLs are resolved once here, so the runner and the HTTP client only
/// ever see absolute targets.
///
/// # Errors
///
/// Returns an error if a resource path cannot be resolved against the
/// base URL, or if the fixture data has no record at the index the
/// valid-PUT case requires.
pub fn smoke_suite(base: &Url, fixture: &[Post]) -> ApplicationResult<Vec<TestCase>> {
    let put_post = fixture.get(PUT_FIXTURE_INDEX).ok_or_else(|| {
        ApplicationError::Fixture(format!(
            "expected at least {} posts, found {}",
            PUT_FIXTURE_INDEX + 1,
            fixture.len()
        ))
    })?;

    let cases = vec![
        TestCase::new(
            "get_post_by_id",
            "GET - by id",
            RequestSpec::get(resource(base, "/posts/20")?),
            vec![
                Check::Status {
                    expected: StatusExpectation::one_of([200, 201]),
                },
                Check::BodyIsObject,
                Check::FieldEquals {
                    field: "id".to_string(),
                    expected: json!(20),
                },
            ],
        ),
        TestCase::new(
            "get_post_by_invalid_id",
            "GET - post by invalid id",
            RequestSpec::get(resource(base, "/posts/invalid_id")?),
            vec![Check::Status {
                expected: StatusExpectation::exact(404),
            }],
        ),
        TestCase::new(
            "get_post_by_id_non_integer",
            "GET - by non integer id",
            RequestSpec::get(resource(base, "/posts/abc")?),
            vec![Check::Status {
                expected: StatusExpectation::exact(404),
            }],
        ),
        TestCase::new(
            "get_nonexistent_post",
            "GET - nonexisting post",
            RequestSpec::get(resource(base, "/posts/10000")?),
            vec![Check::StatusNot {
                rejected: StatusExpectation::one_of([200, 201]),
            }],
        ),
        TestCase::new(
            "create_post",
            "POST - Valid",
            RequestSpec::post(
                resource(base, "/posts")?,
                json!({
                    "userId": 9,
                    "title": "New Post Title",
                    "body": "This is the body of the new post",
                }),
            ),
            vec![
                Check::Status {
                    expected: StatusExpectation::exact(201),
                },
                Check::FieldEquals {
                    field: "userId".to_string(),
                    expected: json!(9),
                },
                Check::FieldEquals {
                    field: "title".to_string(),
                    expected: json!("New Post Title"),
                },
                Check::FieldEquals {
                    field: "body".to_string(),
                    expected: json!("This is the body of the new post"),
                },
            ],
        ),
        TestCase::new(
            "create_post_missing_data",
            "POST - Missing data",
            RequestSpec::post(
                resource(base, "/posts")?,
                json!({
                    "userId": 9,
                    "title": "Post with missing body",
                }),
            ),
            vec![Check::Status {
                expected: StatusExpectation::range(200, 205),
            }],
        ),
        TestCase::new(
            "create_post_with_extra_fields",
            "POST - Extra field",
            RequestSpec::post(
                resource(base, "/posts")?,
                json!({
                    "userId": 9,
                    "title": "Post with extra fields",
                    "body": "This post includes unexpected fields.",
                    "extra_field": "Unexpected data",
                }),
            ),
            vec![
                Check::Status {
                    expected: StatusExpectation::range(200, 205),
                },
                Check::FieldPresent {
                    field: "extra_field".to_string(),
                },
            ],
        ),
        TestCase::new(
            "create_post_empty_payload",
            "POST - Empty payload",
            RequestSpec::post(resource(base, "/posts")?, json!({})),
            vec![Check::Status {
                expected: StatusExpectation::one_of([200, 201]),
            }],
        ),
        TestCase::new(
            "patch_update_post",
            "PATCH - Valid",
            RequestSpec::patch(
                resource(base, "/posts/20")?,
                json!({
                    "title": "Updated Post Title",
                    "body": "Updated post body content",
                }),
            ),
            vec![
                Check::Status {
                    expected: StatusExpectation::range(200, 205),
                },
                Check::FieldEquals {
                    field: "title".to_string(),
                    expected: json!("Updated Post Title"),
                },
                Check::FieldEquals {
                    field: "body".to_string(),
                    expected: json!("Updated post body content"),
                },
            ],
        ),
        TestCase::new(
            "patch_post_with_empty_payload",
            "PATCH - Empty payload",
            RequestSpec::patch(resource(base, "/posts/1")?, json!({})),
            vec![Check::Status {
                expected: StatusExpectation::one_of([200, 201]),
            }],
        ),
        TestCase::new(
            "patch_update_nonexistent_post",
            "PATCH - Nonexistent post",
            RequestSpec::patch(
                resource(base, "/posts/9999")?,
                json!({
                    "title": "Nonexistent Post",
                    "body": "Trying to update a non-existent post",
                }),
            ),
            vec![Check::Status {
                expected: StatusExpectation::one_of([200, 201]),
            }],
        ),
        TestCase::new(
            "put_update_post",
            "Valid PUT",
            RequestSpec::put(
                resource(base, &format!("/posts/{}", put_post.id))?,
                put_post.to_body(),
            ),
            vec![
                Check::Status {
                    expected: StatusExpectation::range(200, 205),
                },
                Check::FieldEquals {
                    field: "userId".to_string(),
                    expected: json!(put_post.user_id),
                },
                Check::FieldEquals {
                    field: "title".to_string(),
                    expected: json!(put_post.title),
                },
                Check::FieldEquals {
                    field: "body".to_string(),
                    expected: json!(put_post.body),
                },
            ],
        ),
        TestCase::new(
            "put_update_post_with_invalid_id",
            "PUT - Invalid id",
            RequestSpec::put(
                resource(base, "/posts/99999")?,
                json!({
                    "userId": 1,
                    "id": 99999,
                    "title": "Updated Post Title",
                    "body": "Updated post body content",
                }),
            ),
            vec![Check::Status {
                expected: StatusExpectation::exact(500),
            }],
        ),
        TestCase::new(
            "put_update_post_with_extra_fields",
            "PUT - Extra field",
            RequestSpec::put(
                resource(base, "/posts/1")?,
                json!({
                    "userId": 1,
                    "id": 1,
                    "title": "Updated Post Title",
                    "body": "Updated post body content",
                    "extra_field": "Extra data",
                }),
            ),
            vec![
                Check::Status {
                    expected: StatusExpectation::exact(404),
                },
                Check::FieldEquals {
                    field: "extra_field".to_string(),
                    expected: json!("Extra data"),
                },
            ],
        ),
        TestCase::new(
            "delete_post",
            "Valid DELETE",
            RequestSpec::delete(resource(base, "/posts/3")?),
            vec![Check::Status {
                expected: StatusExpectation::range(200, 205),
            }],
        ),
        TestCase::new(
            "delete_post_empty_id",
            "DELETE - Empty id",
            RequestSpec::delete(resource(base, "/posts/")?),
            vec![Check::Status {
                expected: StatusExpectation::exact(404),
            }],
        ),
    ];

    Ok(cases)
}

/// Resolves a resource path against the base URL.
fn resource(base: &Url, path: &str) -> ApplicationResult<String> {
    base.join(path)
        .map(Into::into)
        .map_err(|e| ApplicationError::InvalidBaseUrl(format!("{e}: {base} + {path}")))
}
