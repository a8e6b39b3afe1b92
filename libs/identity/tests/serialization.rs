//! Wire-format tests for identifiers.
//!
//! An identifier must serialize exactly like its raw value, in every format,
//! so that consumers of the raw type can read it and vice versa.

use identity::{identifiable, Identifiable, Identifier};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: Identifier<User>,
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Order {
    id: Identifier<Order>,
    user_id: Identifier<User>,
}

struct Session {
    id: Identifier<Session>,
}

struct Deployment {
    id: Identifier<Deployment>,
}

identifiable!(User);
identifiable!(Order, u64);
identifiable!(Session, Uuid);
identifiable!(Deployment, Ulid);

#[test]
fn test_string_id_is_plain_json_string() {
    let id = Identifier::<User>::new("user-42".to_string());
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"user-42\"");
    assert_ne!(json, r#"{"rawValue":"user-42"}"#);
}

#[test]
fn test_integer_id_is_plain_json_number() {
    let id = Identifier::<Order>::new(1001);
    assert_eq!(serde_json::to_string(&id).unwrap(), "1001");
}

#[test]
fn test_encoding_matches_raw_encoding() {
    let raw = "user-42".to_string();
    let id = Identifier::<User>::new(raw.clone());
    assert_eq!(
        serde_json::to_value(&id).unwrap(),
        serde_json::to_value(&raw).unwrap()
    );
}

#[test]
fn test_raw_encoding_decodes_as_identifier() {
    let json = serde_json::to_string(&7u64).unwrap();
    let id: Identifier<Order> = serde_json::from_str(&json).unwrap();
    assert_eq!(id, Identifier::new(7));

    let back: u64 = serde_json::from_str(&serde_json::to_string(&id).unwrap()).unwrap();
    assert_eq!(back, 7);
}

#[test]
fn test_entity_json_shape() {
    let order = Order {
        id: Identifier::new(1001),
        user_id: "user-42".into(),
    };
    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "id": 1001, "user_id": "user-42" })
    );

    let parsed: Order = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.id(), order.id());
    assert_eq!(parsed.user_id, order.user_id);
}

#[test]
fn test_entity_toml_shape() {
    let user = User {
        id: "user-42".into(),
        name: "Ada".to_string(),
    };
    let encoded = toml::to_string(&user).unwrap();
    assert!(encoded.contains("id = \"user-42\""));

    let parsed: User = toml::from_str(&encoded).unwrap();
    assert_eq!(parsed.id(), user.id());
    assert_eq!(parsed.name, user.name);
}

#[test]
fn test_json_roundtrip() {
    let id = Identifier::<User>::new(String::new());
    let json = serde_json::to_string(&id).unwrap();
    let parsed: Identifier<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_string_where_integer_expected_fails() {
    let result: Result<Identifier<Order>, _> = serde_json::from_str("\"1001\"");
    let err = result.unwrap_err();
    assert!(err.is_data());
}

#[test]
fn test_error_matches_raw_error() {
    let id_err = serde_json::from_str::<Identifier<Order>>("-1").unwrap_err();
    let raw_err = serde_json::from_str::<u64>("-1").unwrap_err();
    assert_eq!(id_err.to_string(), raw_err.to_string());
}

#[test]
fn test_object_where_scalar_expected_fails() {
    let result: Result<Identifier<User>, _> = serde_json::from_str(r#"{"rawValue":"user-42"}"#);
    assert!(result.is_err());
}

#[test]
fn test_uuid_backed_identifier() {
    let raw = Uuid::from_u128(0x6f1c_2d3e_4b5a_4c6d_8e7f_8091_a2b3_c4d5);
    let session = Session {
        id: Identifier::new(raw),
    };

    let json = serde_json::to_string(session.id()).unwrap();
    assert_eq!(json, serde_json::to_string(&raw).unwrap());

    let parsed: Identifier<Session> = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, session.id());
}

#[test]
fn test_ulid_backed_identifier_parses_from_display() {
    let raw: Ulid = "01HV4Z2WQXKJNM8GPQY6VBKC3D".parse().unwrap();
    let deployment = Deployment {
        id: Identifier::new(raw),
    };

    let text = deployment.id().to_string();
    assert_eq!(text, "01HV4Z2WQXKJNM8GPQY6VBKC3D");

    let parsed: Identifier<Deployment> = text.parse().unwrap();
    assert_eq!(&parsed, deployment.id());
}

#[test]
fn test_ulid_parse_failure_reports_entity() {
    let err = "not-a-ulid".parse::<Identifier<Deployment>>().unwrap_err();
    assert!(err.entity().ends_with("Deployment"));
    assert!(err.to_string().contains("Deployment"));
}
