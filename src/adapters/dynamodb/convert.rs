//! DynamoDB item to JSON conversion
//!
//! Items are rendered in DynamoDB's own JSON wire form, the shape the
//! low-level `Scan` API returns: every attribute value is wrapped in a
//! single-key object naming its type.
//!
//! | Attribute | JSON |
//! |---|---|
//! | `S` | `{"S": "text"}` |
//! | `N` | `{"N": "12.5"}` (string, as sent by DynamoDB) |
//! | `B` | `{"B": "<base64>"}` |
//! | `BOOL` | `{"BOOL": true}` |
//! | `NULL` | `{"NULL": true}` |
//! | `SS` / `NS` / `BS` | `{"SS": ["a", "b"]}` |
//! | `L` | `{"L": [ ... ]}` |
//! | `M` | `{"M": { ... }}` |

use crate::domain::{DumpError, Record, Result};
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Converts one scanned item into a JSON record
///
/// Attribute names come out sorted; the SDK delivers them in an unordered map.
///
/// # Errors
///
/// Returns [`DumpError::Serialization`] if the item holds an attribute type
/// this SDK version does not know.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record> {
    attribute_map_to_json(item).map(Value::Object)
}

/// Converts a single attribute value into its typed JSON form
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value> {
    let (tag, inner) = match value {
        AttributeValue::S(s) => ("S", Value::String(s.clone())),
        AttributeValue::N(n) => ("N", Value::String(n.clone())),
        AttributeValue::B(b) => ("B", Value::String(encode_blob(b))),
        AttributeValue::Bool(b) => ("BOOL", Value::Bool(*b)),
        AttributeValue::Null(b) => ("NULL", Value::Bool(*b)),
        AttributeValue::Ss(values) => ("SS", strings(values)),
        AttributeValue::Ns(values) => ("NS", strings(values)),
        AttributeValue::Bs(values) => (
            "BS",
            Value::Array(
                values
                    .iter()
                    .map(|b| Value::String(encode_blob(b)))
                    .collect(),
            ),
        ),
        AttributeValue::L(values) => (
            "L",
            Value::Array(
                values
                    .iter()
                    .map(attribute_to_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
        ),
        AttributeValue::M(map) => ("M", Value::Object(attribute_map_to_json(map)?)),
        other => {
            return Err(DumpError::Serialization(format!(
                "Unsupported DynamoDB attribute type: {other:?}"
            )))
        }
    };

    let mut wrapper = Map::with_capacity(1);
    wrapper.insert(tag.to_string(), inner);
    Ok(Value::Object(wrapper))
}

fn attribute_map_to_json(map: &HashMap<String, AttributeValue>) -> Result<Map<String, Value>> {
    let mut names: Vec<&String> = map.keys().collect();
    names.sort();

    let mut object = Map::new();
    for name in names {
        object.insert(name.clone(), attribute_to_json(&map[name])?);
    }
    Ok(object)
}

fn strings(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

fn encode_blob(blob: &Blob) -> String {
    BASE64.encode(blob.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(pairs: Vec<(&str, AttributeValue)>) -> HashMap<String, AttributeValue> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_scalar_attributes() {
        let record = item_to_record(&item(vec![
            ("id", AttributeValue::S("user-1".to_string())),
            ("age", AttributeValue::N("42".to_string())),
            ("active", AttributeValue::Bool(true)),
            ("nickname", AttributeValue::Null(true)),
        ]))
        .unwrap();

        assert_eq!(
            record,
            json!({
                "active": {"BOOL": true},
                "age": {"N": "42"},
                "id": {"S": "user-1"},
                "nickname": {"NULL": true}
            })
        );
    }

    #[test]
    fn test_number_keeps_exact_text() {
        let value = attribute_to_json(&AttributeValue::N("12345678901234567890.0001".to_string()))
            .unwrap();
        assert_eq!(value, json!({"N": "12345678901234567890.0001"}));
    }

    #[test]
    fn test_binary_attributes_are_base64() {
        let value = attribute_to_json(&AttributeValue::B(Blob::new(b"hello".to_vec()))).unwrap();
        assert_eq!(value, json!({"B": "aGVsbG8="}));

        let set = attribute_to_json(&AttributeValue::Bs(vec![
            Blob::new(vec![0u8]),
            Blob::new(vec![0xffu8]),
        ]))
        .unwrap();
        assert_eq!(set, json!({"BS": ["AA==", "/w=="]}));
    }

    #[test]
    fn test_set_attributes() {
        let ss = attribute_to_json(&AttributeValue::Ss(vec!["a".into(), "b".into()])).unwrap();
        assert_eq!(ss, json!({"SS": ["a", "b"]}));

        let ns = attribute_to_json(&AttributeValue::Ns(vec!["1".into(), "2.5".into()])).unwrap();
        assert_eq!(ns, json!({"NS": ["1", "2.5"]}));
    }

    #[test]
    fn test_nested_list_and_map() {
        let value = attribute_to_json(&AttributeValue::M(item(vec![
            (
                "tags",
                AttributeValue::L(vec![
                    AttributeValue::S("x".to_string()),
                    AttributeValue::N("1".to_string()),
                ]),
            ),
            (
                "address",
                AttributeValue::M(item(vec![(
                    "city",
                    AttributeValue::S("Oslo".to_string()),
                )])),
            ),
        ])))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "M": {
                    "address": {"M": {"city": {"S": "Oslo"}}},
                    "tags": {"L": [{"S": "x"}, {"N": "1"}]}
                }
            })
        );
    }

    #[test]
    fn test_attribute_names_are_sorted() {
        let record = item_to_record(&item(vec![
            ("zeta", AttributeValue::S("z".to_string())),
            ("alpha", AttributeValue::S("a".to_string())),
            ("mid", AttributeValue::S("m".to_string())),
        ]))
        .unwrap();

        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_item() {
        assert_eq!(item_to_record(&HashMap::new()).unwrap(), json!({}));
    }
}
