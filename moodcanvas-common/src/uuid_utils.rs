//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Generate a new UUIDv4 rendered in hyphenated form
pub fn generate_string() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(generate(), generate());
    }

    #[test]
    fn test_generate_string_is_hyphenated_v4() {
        let id = generate_string();
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).expect("generated id should parse");
        assert_eq!(parsed.get_version_num(), 4);
    }
}
