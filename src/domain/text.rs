/// Splits free text on newlines into trimmed, non-empty lines. Both the
/// submission pipeline and the renderer run lists through this, so text
/// that drifted in storage still comes out as clean bullet items.
pub fn normalize_lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serde codec for list fields persisted as newline-joined text.
///
/// The documents keep the original flat-string layout on disk while the
/// domain model works with an ordered `Vec<String>`; the conversion
/// happens exactly once, here at the storage boundary.
pub mod newline_list {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::normalize_lines;

    pub fn serialize<S>(lines: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&lines.join("\n"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(normalize_lines(&raw))
    }
}
