//! Integration tests for permission string parsing and aggregation.
//!
//! These tests exercise the public API the way a record layer uses it:
//! building permission strings from roles, parsing stored strings back, and
//! expanding aggregates against an allow-list before persisting.

use acl_permission::{actions, Permission, PermissionError, PermissionErrorKind};
use acl_role::Role;

const ALLOWED: [&str; 4] = ["create", "update", "delete", "read"];

#[test]
fn test_round_trip_all_role_shapes() {
    let cases = [
        ("read", "any", "", ""),
        ("create", "user", "123", ""),
        ("update", "team", "", "admins"),
        ("delete", "user", "123", "owner"),
        ("write", "label", "vip", ""),
        ("custom", "users", "", "verified"),
    ];

    for (action, role, identifier, dimension) in cases {
        let built = Permission::new(action, role, identifier, dimension);
        let parsed = Permission::parse(&built.to_string()).unwrap();
        assert_eq!(parsed, built);
        assert_eq!(parsed.permission(), action);
        assert_eq!(parsed.role(), role);
        assert_eq!(parsed.identifier(), identifier);
        assert_eq!(parsed.dimension(), dimension);
        assert_eq!(parsed.to_string(), built.to_string());
    }
}

#[test]
fn test_parse_four_cases() {
    let perm = Permission::parse(r#"read("any")"#).unwrap();
    assert_eq!(perm.role(), "any");
    assert_eq!(perm.identifier(), "");
    assert_eq!(perm.dimension(), "");

    let perm = Permission::parse(r#"read("user:123")"#).unwrap();
    assert_eq!(perm.role(), "user");
    assert_eq!(perm.identifier(), "123");
    assert_eq!(perm.dimension(), "");

    let perm = Permission::parse(r#"read("team/admins")"#).unwrap();
    assert_eq!(perm.role(), "team");
    assert_eq!(perm.identifier(), "");
    assert_eq!(perm.dimension(), "admins");

    let perm = Permission::parse(r#"read("user:123/owner")"#).unwrap();
    assert_eq!(perm.role(), "user");
    assert_eq!(perm.identifier(), "123");
    assert_eq!(perm.dimension(), "owner");
}

#[test]
fn test_parse_rejects_malformed() {
    let err = Permission::parse("malformed").unwrap_err();
    assert_eq!(
        err,
        PermissionError::MalformedFormat {
            input: "malformed".to_string()
        }
    );
    assert_eq!(err.error_code(), "INVALID_PERMISSION_FORMAT");
}

#[test]
fn test_parse_rejects_multiple_dimensions() {
    let err = Permission::parse(r#"read("user:1/a/b")"#).unwrap_err();
    assert_eq!(err.kind(), PermissionErrorKind::MultipleDimensions);
    assert_eq!(err.input(), r#"read("user:1/a/b")"#);

    let err = Permission::parse(r#"read("team/a/b")"#).unwrap_err();
    assert_eq!(err.kind(), PermissionErrorKind::MultipleDimensions);
}

#[test]
fn test_parse_rejects_empty_dimension() {
    let err = Permission::parse(r#"read("user:1/")"#).unwrap_err();
    assert_eq!(err.kind(), PermissionErrorKind::EmptyDimension);
    assert_eq!(err.input(), r#"read("user:1/")"#);
}

#[test]
fn test_from_str() {
    let perm: Permission = r#"update("member:m1")"#.parse().unwrap();
    assert_eq!(perm.as_role(), &Role::member("m1"));
    assert!("update".parse::<Permission>().is_err());
}

#[test]
fn test_aggregate_expands_write() {
    let input = [r#"write("user:123")"#];
    let out = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap().unwrap();
    assert_eq!(
        out,
        vec![
            r#"create("user:123")"#,
            r#"update("user:123")"#,
            r#"delete("user:123")"#,
        ]
    );
}

#[test]
fn test_aggregate_restricted_allow_list() {
    let input = [r#"write("user:123")"#];
    let out = Permission::aggregate(Some(&input[..]), &["create"]).unwrap().unwrap();
    assert_eq!(out, vec![r#"create("user:123")"#]);
}

#[test]
fn test_aggregate_allow_list_without_primitives() {
    let input = [r#"write("user:123")"#];
    let out = Permission::aggregate(Some(&input[..]), &["read"]).unwrap().unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_aggregate_none_propagates() {
    let out = Permission::aggregate::<&str, &str>(None, &ALLOWED).unwrap();
    assert!(out.is_none());
}

#[test]
fn test_aggregate_empty_input() {
    let input: [&str; 0] = [];
    let out = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap();
    assert_eq!(out, Some(vec![]));
}

#[test]
fn test_aggregate_pass_through() {
    let input = [r#"read("user:123")"#];
    let out = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap().unwrap();
    assert_eq!(out, vec![r#"read("user:123")"#]);
}

#[test]
fn test_aggregate_pass_through_is_not_filtered() {
    // Only expanded primitives are checked against the allow-list.
    let input = [r#"read("any")"#];
    let out = Permission::aggregate(Some(&input[..]), &["create"]).unwrap().unwrap();
    assert_eq!(out, vec![r#"read("any")"#]);
}

#[test]
fn test_aggregate_keeps_input_order() {
    let input = vec![
        r#"read("any")"#.to_string(),
        r#"write("team:abc/owner")"#.to_string(),
        r#"delete("user:1")"#.to_string(),
    ];
    let out = Permission::aggregate(Some(input.as_slice()), &actions::PERMISSIONS)
        .unwrap()
        .unwrap();
    assert_eq!(
        out,
        vec![
            r#"read("any")"#,
            r#"create("team:abc/owner")"#,
            r#"update("team:abc/owner")"#,
            r#"delete("team:abc/owner")"#,
            r#"delete("user:1")"#,
        ]
    );
}

#[test]
fn test_aggregate_aborts_on_invalid_entry() {
    let input = [r#"read("any")"#, r#"write("user:1/")"#, r#"read("user:2")"#];
    let err = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap_err();
    assert_eq!(err.kind(), PermissionErrorKind::EmptyDimension);
    assert_eq!(err.input(), r#"write("user:1/")"#);
}

#[test]
fn test_aggregate_normalizes_pass_through() {
    let input = [r#"read("user:")"#];
    let out = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap().unwrap();
    assert_eq!(out, vec![r#"read("user")"#]);
}

#[test]
fn test_named_constructors_match_new() {
    let role = Role::new("user", "123", "");
    assert_eq!(
        Permission::read(&role),
        Permission::new("read", "user", "123", "").to_string()
    );
    assert_eq!(
        Permission::create(&role),
        Permission::new("create", "user", "123", "").to_string()
    );
    assert_eq!(
        Permission::update(&role),
        Permission::new("update", "user", "123", "").to_string()
    );
    assert_eq!(
        Permission::delete(&role),
        Permission::new("delete", "user", "123", "").to_string()
    );
}

#[test]
fn test_write_constructor_feeds_aggregate() {
    let input = [Permission::write(&Role::users("verified"))];
    let out = Permission::aggregate(Some(&input[..]), &ALLOWED).unwrap().unwrap();
    assert_eq!(
        out,
        vec![
            r#"create("users/verified")"#,
            r#"update("users/verified")"#,
            r#"delete("users/verified")"#,
        ]
    );
}

#[test]
fn test_permission_serde() {
    let perm = Permission::new("read", "team", "abc", "owner");
    let json = serde_json::to_string(&perm).unwrap();
    assert_eq!(json, r#""read(\"team:abc/owner\")""#);

    let back: Permission = serde_json::from_str(&json).unwrap();
    assert_eq!(back, perm);

    assert!(serde_json::from_str::<Permission>(r#""malformed""#).is_err());
}
