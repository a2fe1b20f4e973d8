use uuid::Uuid;

/// Generates a random (version 4) UUID in hyphenated lowercase form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
