//! Serialization boundary between stored documents and API responses
//!
//! Every route that returns documents passes them through here, so the
//! identifier conversion lives in one place instead of being repeated per
//! handler.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Convert a stored document into its public JSON form
///
/// Renames the internal `_id` field to `id` and renders it as a hex string,
/// then converts any remaining identifier-typed field the same way. A
/// document without an internal identifier passes through unchanged, and an
/// absent document serializes to JSON null. Applying the conversion twice
/// yields the same result as applying it once.
pub fn serialize_document(document: Option<Document>) -> Value {
    let Some(mut document) = document else {
        return Value::Null;
    };

    if let Some(raw) = document.remove("_id") {
        let id = match raw {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        document.insert("id", id);
    }

    for (_, value) in document.iter_mut() {
        if let Bson::ObjectId(oid) = value {
            *value = Bson::String(oid.to_hex());
        }
    }

    Bson::Document(document).into_relaxed_extjson()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn renames_internal_identifier_to_id() {
        let oid = ObjectId::new();
        let value = serialize_document(Some(doc! {
            "_id": oid,
            "title": "Dreamscape",
            "duration_ms": 152000_i64,
        }));

        assert_eq!(value["id"], json!(oid.to_hex()));
        assert!(value.get("_id").is_none());
        assert_eq!(value["title"], json!("Dreamscape"));
        assert_eq!(value["duration_ms"], json!(152000));
    }

    #[test]
    fn converts_identifier_typed_fields_to_strings() {
        let owner = ObjectId::new();
        let value = serialize_document(Some(doc! {
            "_id": ObjectId::new(),
            "owner": owner,
        }));

        assert_eq!(value["owner"], json!(owner.to_hex()));
    }

    #[test]
    fn absent_document_serializes_to_null() {
        assert_eq!(serialize_document(None), Value::Null);
    }

    #[test]
    fn document_without_identifier_passes_through() {
        let value = serialize_document(Some(doc! { "name": "Morning", "tracks": [] }));
        assert_eq!(value, json!({ "name": "Morning", "tracks": [] }));
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = serialize_document(Some(doc! {
            "_id": ObjectId::new(),
            "name": "Morning",
            "tracks": ["0123456789abcdef01234567"],
        }));

        // Feed the serialized form back through the boundary.
        let document = match &once {
            Value::Object(map) => {
                let mut doc = Document::new();
                for (k, v) in map {
                    doc.insert(k.clone(), Bson::try_from(v.clone()).expect("plain JSON value"));
                }
                doc
            }
            other => panic!("expected object, got {other:?}"),
        };

        let twice = serialize_document(Some(document));
        assert_eq!(once, twice);
    }
}
