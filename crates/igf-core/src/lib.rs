//! igf-catalog/crates/igf-core/src/lib.rs
//!
//! The domain model, error taxonomy and store contract for the IGF game catalog.

pub mod catalog;
pub mod error;
pub mod models;
pub mod picker;
pub mod traits;

// Re-exporting for easier access in other crates
pub use catalog::*;
pub use error::*;
pub use models::*;
pub use picker::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_fields_serialize_with_form_names() {
        let fields = GameFields {
            title: Some("Foo".into()),
            short_description: Some("A short one".into()),
            ..GameFields::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["title"], "Foo");
        assert_eq!(json["shortDescription"], "A short one");
        assert!(json.get("genre").is_none());
    }

    #[test]
    fn test_game_id_is_opaque_text() {
        let id = GameId::from("65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }
}
