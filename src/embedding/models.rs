//! Input shapes for the embedding adapter

use serde::{Deserialize, Serialize};

/// Input arity for an embedding call.
///
/// A single string is normalized to a one-element batch before processing,
/// so the output contract (one row per input) is unaffected by input arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl EmbeddingInput {
    /// Normalize to an ordered batch
    pub fn into_batch(self) -> Vec<String> {
        match self {
            EmbeddingInput::Single(text) => vec![text],
            EmbeddingInput::Batch(texts) => texts,
        }
    }
}

impl From<String> for EmbeddingInput {
    fn from(text: String) -> Self {
        EmbeddingInput::Single(text)
    }
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        EmbeddingInput::Single(text.to_string())
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        EmbeddingInput::Batch(texts)
    }
}

impl From<&[String]> for EmbeddingInput {
    fn from(texts: &[String]) -> Self {
        EmbeddingInput::Batch(texts.to_vec())
    }
}

impl From<Vec<&str>> for EmbeddingInput {
    fn from(texts: Vec<&str>) -> Self {
        EmbeddingInput::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_normalizes_to_one_element_batch() {
        let batch = EmbeddingInput::from("hello").into_batch();
        assert_eq!(batch, vec!["hello".to_string()]);
    }

    #[test]
    fn test_batch_order_preserved() {
        let batch = EmbeddingInput::from(vec!["a", "b", "c"]).into_batch();
        assert_eq!(batch, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_untagged_deserialization() {
        let single: EmbeddingInput = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(single, EmbeddingInput::Single("hello".to_string()));

        let batch: EmbeddingInput = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(
            batch,
            EmbeddingInput::Batch(vec!["a".to_string(), "b".to_string()])
        );
    }
}
