//! Release Validation Invariant Tests
//!
//! - "latest" in any letter case is never accepted as a `ref`
//! - Over-length refs fail regardless of content
//! - Validation is deterministic
//! - Absent optional fields always pass
//! - Blank or null `url` and `dateReleased` read as absent
//! - Null list elements fail under their field
//! - The organization variant accepts everything the base accepts

use release_intake::config::ValidationConfig;
use release_intake::release::{OrganizationReleaseInput, ReleaseInput, ReleaseSchemas};
use release_intake::schema::ErrorCode;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn schemas() -> ReleaseSchemas {
    ReleaseSchemas::default()
}

fn commit(id: &str) -> Value {
    json!({"id": id, "repository": "acme/web", "message": "Bump"})
}

/// Payloads the base validator accepts.
fn accepted_payloads() -> Vec<Value> {
    vec![
        json!({}),
        json!({"ref": "1.0.0"}),
        json!({"ref": "latest-rc"}),
        json!({"url": "https://ci.example.com/builds/42"}),
        json!({"dateReleased": "2023-07-04T12:00:00Z"}),
        json!({"commits": []}),
        json!({"commits": [commit("abc"), commit("def")]}),
        json!({
            "ref": "release-2023-07",
            "url": "http://example.com/r",
            "dateReleased": "2023-07-04T12:00:00.123+05:30",
            "commits": [commit("abc")],
            "unknown": {"ignored": true}
        }),
    ]
}

// =============================================================================
// Reserved Name Tests
// =============================================================================

#[test]
fn test_latest_rejected_in_every_case() {
    let schemas = schemas();
    for name in ["latest", "LATEST", "Latest", "lAtest", "latesT"] {
        let errors = schemas.validate_release(&json!({"ref": name})).unwrap_err();
        assert_eq!(
            errors.messages("ref"),
            vec![format!("Release with name {} is not allowed", name)]
        );
        assert_eq!(errors.errors("ref")[0].code, ErrorCode::Invalid);
    }
}

#[test]
fn test_scenario_uppercase_latest() {
    let errors = schemas().validate_release(&json!({"ref": "LATEST"})).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.messages("ref"),
        vec!["Release with name LATEST is not allowed"]
    );
}

#[test]
fn test_other_names_pass_ref_check() {
    let schemas = schemas();
    for name in ["1.0.0", "late", "latest2", "not-latest", "v-latest", "latést", "", "  "] {
        let input = schemas.validate_release(&json!({"ref": name})).unwrap();
        assert_eq!(input.git_ref.as_deref(), Some(name));
    }
}

#[test]
fn test_scenario_plain_ref_normalized() {
    let input = schemas().validate_release(&json!({"ref": "1.0.0"})).unwrap();
    assert_eq!(
        input,
        ReleaseInput {
            git_ref: Some("1.0.0".into()),
            ..Default::default()
        }
    );
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({"ref": "1.0.0"}));
}

// =============================================================================
// Length Tests
// =============================================================================

#[test]
fn test_over_length_ref_fails_regardless_of_content() {
    let schemas = ReleaseSchemas::new(&ValidationConfig::with_max_version_length(10));

    for name in ["a".repeat(11), "latest".repeat(2), "é".repeat(11)] {
        let errors = schemas.validate_release(&json!({"ref": name})).unwrap_err();
        assert_eq!(errors.errors("ref").len(), 1);
        assert_eq!(errors.errors("ref")[0].code, ErrorCode::MaxLength);
    }

    assert!(schemas.validate_release(&json!({"ref": "a".repeat(10)})).is_ok());
}

#[test]
fn test_default_length_limit() {
    let schemas = schemas();
    assert!(schemas.validate_release(&json!({"ref": "v".repeat(250)})).is_ok());
    assert!(schemas.validate_release(&json!({"ref": "v".repeat(251)})).is_err());
}

// =============================================================================
// Format Tests
// =============================================================================

#[test]
fn test_scenario_bad_url() {
    let errors = schemas().validate_release(&json!({"url": "not-a-url"})).unwrap_err();
    assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["url"]);
    assert_eq!(errors.errors("url")[0].code, ErrorCode::InvalidUrl);
}

#[test]
fn test_scenario_bad_date() {
    let errors = schemas()
        .validate_release(&json!({"dateReleased": "2023-13-40"}))
        .unwrap_err();
    assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["dateReleased"]);
    assert_eq!(errors.errors("dateReleased")[0].code, ErrorCode::InvalidDateTime);
}

#[test]
fn test_date_released_outside_four_digit_years() {
    let schemas = schemas();
    for date in ["9999-12-31T23:00:00-02:00", "0000-01-01T00:30:00+01:00"] {
        let errors = schemas
            .validate_release(&json!({"dateReleased": date}))
            .unwrap_err();
        assert_eq!(errors.errors("dateReleased")[0].code, ErrorCode::InvalidDateTime);
    }
}

#[test]
fn test_date_released_parsed() {
    let input = schemas()
        .validate_release(&json!({"dateReleased": "2023-07-04T12:00:00+02:00"}))
        .unwrap();
    assert_eq!(
        input.date_released.unwrap().to_rfc3339(),
        "2023-07-04T10:00:00+00:00"
    );
}

#[test]
fn test_all_field_errors_reported_together() {
    let errors = schemas()
        .validate_release(&json!({
            "ref": "latest",
            "url": "nope",
            "dateReleased": "nope",
            "commits": "nope"
        }))
        .unwrap_err();

    assert_eq!(
        errors.field_names().collect::<Vec<_>>(),
        vec!["commits", "dateReleased", "ref", "url"]
    );
}

// =============================================================================
// Commit List Tests
// =============================================================================

#[test]
fn test_null_commit_fails_even_with_valid_siblings() {
    let errors = schemas()
        .validate_release(&json!({"commits": [commit("abc"), null, commit("def")]}))
        .unwrap_err();

    assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["commits"]);
    assert_eq!(errors.errors("commits")[0].path, "commits[1]");
    assert_eq!(errors.errors("commits")[0].code, ErrorCode::Null);
}

#[test]
fn test_commits_must_be_list() {
    let errors = schemas()
        .validate_release(&json!({"commits": commit("abc")}))
        .unwrap_err();
    assert_eq!(errors.errors("commits")[0].code, ErrorCode::NotAList);
}

#[test]
fn test_commits_null_rejected() {
    let errors = schemas().validate_release(&json!({"commits": null})).unwrap_err();
    assert_eq!(errors.messages("commits"), vec!["This field may not be null."]);
}

#[test]
fn test_each_commit_validated_independently() {
    let errors = schemas()
        .validate_release(&json!({
            "commits": [
                commit("abc"),
                {"repository": "acme/web"},
                {"id": "def", "author_email": "not-an-email"}
            ]
        }))
        .unwrap_err();

    assert_eq!(
        errors.messages("commits"),
        vec![
            "[1].id: This field is required.",
            "[2].author_email: Enter a valid email address.",
        ]
    );
}

#[test]
fn test_commits_normalized() {
    let input = schemas()
        .validate_release(&json!({"commits": [{"id": 123456, "extra": "dropped"}]}))
        .unwrap();
    let commits = input.commits.unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].id, "123456");
    assert_eq!(commits[0].repository, None);
}

// =============================================================================
// Optional Field Tests
// =============================================================================

#[test]
fn test_absent_fields_pass() {
    let schemas = schemas();
    assert_eq!(schemas.validate_release(&json!({})).unwrap(), ReleaseInput::default());
    assert_eq!(
        schemas.validate_organization_release(&json!({})).unwrap(),
        OrganizationReleaseInput::default()
    );
}

#[test]
fn test_blank_url_and_date_read_as_absent() {
    let schemas = schemas();
    for payload in [
        json!({"url": ""}),
        json!({"url": null}),
        json!({"dateReleased": ""}),
        json!({"dateReleased": null}),
        json!({"ref": "1.0.0", "url": "", "dateReleased": null}),
    ] {
        let input = schemas.validate_release(&payload).unwrap();
        assert_eq!(input.url, None, "payload {}", payload);
        assert_eq!(input.date_released, None, "payload {}", payload);

        let org = schemas.validate_organization_release(&payload).unwrap();
        assert_eq!(org.release, input);
    }
}

#[test]
fn test_blank_values_dropped_from_output() {
    let input = schemas()
        .validate_release(&json!({"ref": "1.0.0", "url": "", "dateReleased": ""}))
        .unwrap();
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({"ref": "1.0.0"}));
}

#[test]
fn test_whitespace_url_still_rejected() {
    let errors = schemas().validate_release(&json!({"url": "  "})).unwrap_err();
    assert_eq!(errors.errors("url")[0].code, ErrorCode::InvalidUrl);
}

#[test]
fn test_scenario_empty_organization_payload() {
    let input = schemas().validate_organization_release(&json!({})).unwrap();
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({}));
}

// =============================================================================
// Organization Variant Tests
// =============================================================================

#[test]
fn test_organization_accepts_superset() {
    let schemas = schemas();
    for payload in accepted_payloads() {
        let base = schemas.validate_release(&payload).unwrap();
        let org = schemas.validate_organization_release(&payload).unwrap();
        assert_eq!(org.release, base, "payload {}", payload);
        assert!(org.head_commits.is_none());
        assert!(org.refs.is_none());
    }
}

#[test]
fn test_organization_head_commit_lists() {
    let input = schemas()
        .validate_organization_release(&json!({
            "ref": "2.0.0",
            "headCommits": [
                {"currentId": "abc", "repository": "acme/web", "previousId": "aaa"}
            ],
            "refs": [
                {"commit": "def", "repository": "acme/api"},
                {"commit": "123", "repository": "acme/cli", "previousCommit": "100"}
            ]
        }))
        .unwrap();

    assert_eq!(input.release.git_ref.as_deref(), Some("2.0.0"));
    let heads = input.head_commits.unwrap();
    assert_eq!(heads[0].current_id, "abc");
    assert_eq!(heads[0].previous_id.as_deref(), Some("aaa"));
    let refs = input.refs.unwrap();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[1].previous_commit.as_deref(), Some("100"));
}

#[test]
fn test_scenario_null_ref_entry() {
    let errors = schemas()
        .validate_organization_release(&json!({"refs": [null]}))
        .unwrap_err();
    assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["refs"]);
    assert_eq!(errors.messages("refs"), vec!["[0]: This field may not be null."]);
}

#[test]
fn test_null_head_commit_entry() {
    let errors = schemas()
        .validate_organization_release(&json!({
            "headCommits": [{"currentId": "abc", "repository": "acme/web"}, null]
        }))
        .unwrap_err();
    assert_eq!(errors.errors("headCommits")[0].path, "headCommits[1]");
}

#[test]
fn test_malformed_head_commit_entries() {
    let errors = schemas()
        .validate_organization_release(&json!({
            "headCommits": [{"repository": "acme/web"}],
            "refs": [{"commit": "x".repeat(65), "repository": "acme/api"}]
        }))
        .unwrap_err();

    assert_eq!(
        errors.messages("headCommits"),
        vec!["[0].currentId: This field is required."]
    );
    assert_eq!(
        errors.messages("refs"),
        vec!["[0].commit: Ensure this field has no more than 64 characters."]
    );
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_validation_is_deterministic() {
    let schemas = schemas();
    let payloads = [
        json!({"ref": "LATEST", "url": "nope", "commits": [null]}),
        json!({"ref": "1.0.0", "dateReleased": "2023-07-04T12:00:00Z"}),
    ];

    for payload in &payloads {
        let first = schemas.validate_organization_release(payload);
        for _ in 0..50 {
            assert_eq!(schemas.validate_organization_release(payload), first);
        }
    }
}

#[test]
fn test_non_object_payload() {
    let errors = schemas().validate_release(&json!("1.0.0")).unwrap_err();
    assert!(errors.contains("non_field_errors"));
}
