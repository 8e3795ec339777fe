//! Decoding of text-generation endpoint responses

use crate::error::ExtractorError;
use serde::Deserialize;

/// One generation returned by the endpoint
#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

/// Pull the completion text out of a text-generation response body
///
/// The endpoint answers with `[{"generated_text": "..."}]`; only the first
/// generation is used.
pub fn decode_generated_text(body: &str) -> Result<String, ExtractorError> {
    let generations: Vec<Generation> = serde_json::from_str(body)?;

    generations
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| ExtractorError::Payload("response contains no generations".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_first_generation() {
        let body = r#"[{"generated_text": "First Name: Ada"}, {"generated_text": "ignored"}]"#;
        assert_eq!(decode_generated_text(body).unwrap(), "First Name: Ada");
    }

    #[test]
    fn test_decode_ignores_extra_keys() {
        let body = r#"[{"generated_text": "ok", "details": {"finish_reason": "length"}}]"#;
        assert_eq!(decode_generated_text(body).unwrap(), "ok");
    }

    #[test]
    fn test_decode_empty_list() {
        let result = decode_generated_text("[]");
        assert!(matches!(result, Err(ExtractorError::Payload(_))));
    }

    #[test]
    fn test_decode_missing_field() {
        let result = decode_generated_text(r#"[{"text": "First Name: Ada"}]"#);
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }

    #[test]
    fn test_decode_not_json() {
        let result = decode_generated_text("First Name: Ada");
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }
}
