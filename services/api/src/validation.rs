//! Input validation utilities

use mongodb::bson::oid::ObjectId;
use regex::Regex;
use std::sync::OnceLock;

/// Validate a document identifier in its public hex form
///
/// Accepts exactly the 24-character hex token the store assigns; anything
/// else is rejected before it reaches a lookup. `field` names the identifier
/// in the error message.
pub fn validate_object_id(value: &str, field: &str) -> Result<ObjectId, String> {
    static OBJECT_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = OBJECT_ID_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{24}$").expect("Failed to compile object id regex")
    });

    if !regex.is_match(value) {
        return Err(format!("Invalid {field}"));
    }

    ObjectId::parse_str(value).map_err(|_| format!("Invalid {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_store_assigned_tokens() {
        let oid = ObjectId::new();
        let parsed = validate_object_id(&oid.to_hex(), "track id")
            .expect("hex form of a fresh id should validate");
        assert_eq!(parsed, oid);
    }

    #[test]
    fn accepts_uppercase_hex() {
        assert!(validate_object_id("0123456789ABCDEF01234567", "track id").is_ok());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in [
            "",
            "bad-id",
            "0123456789abcdef0123456",   // one short
            "0123456789abcdef012345678", // one long
            "0123456789abcdef0123456g",  // non-hex
        ] {
            let err = validate_object_id(bad, "playlist id").unwrap_err();
            assert_eq!(err, "Invalid playlist id");
        }
    }
}
