use crate::AccountRecord;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_account_record_when_serialized_then_uses_stored_field_names() {
    let record = AccountRecord::new("u1", "ada@example.com", "Ada", "Lovelace");

    let value = serde_json::to_value(&record).unwrap();

    assert_that!(
        value,
        eq(&json!({
            "id": "u1",
            "email": "ada@example.com",
            "firstname": "Ada",
            "lastname": "Lovelace",
        }))
    );
}

#[test]
fn given_stored_document_when_deserialized_then_maps_all_fields() {
    let value = json!({
        "id": "u2",
        "email": "grace@example.com",
        "firstname": "Grace",
        "lastname": "Hopper",
    });

    let record: AccountRecord = serde_json::from_value(value).unwrap();

    assert_that!(record.id.as_str(), eq("u2"));
    assert_that!(record.email.as_str(), eq("grace@example.com"));
    assert_that!(record.first_name.as_str(), eq("Grace"));
    assert_that!(record.last_name.as_str(), eq("Hopper"));
}

#[test]
fn given_document_missing_a_field_when_deserialized_then_fails() {
    let value = json!({
        "id": "u3",
        "email": "x@example.com",
        "firstname": "X",
    });

    let result = serde_json::from_value::<AccountRecord>(value);

    assert_that!(result, err(anything()));
}
