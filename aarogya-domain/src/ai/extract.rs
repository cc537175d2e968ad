//! Normalization of model output into JSON.
//! Models are asked for strict JSON but frequently wrap it in Markdown
//! fences or chatty prose. These helpers strip fences, slice out the
//! embedded object or array, and parse. No repair beyond that: when
//! parsing fails the raw model text is preserved on the error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::AiError;

/// Strip a Markdown code fence wrapper from model output
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let inner = trimmed.trim_start_matches('`');
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}

/// Slice out the first-`{` to last-`}` region of the text
pub fn slice_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Slice out the first-`[` to last-`]` region of the text
pub fn slice_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse model output as JSON after stripping fences
pub fn parse_json(text: &str) -> Result<Value, AiError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| AiError::Parse {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

/// Parse model output into a typed value after stripping fences
pub fn parse_json_as<T: DeserializeOwned>(text: &str) -> Result<T, AiError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| AiError::Parse {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

/// Parse the brace-delimited JSON object embedded in chatty model output
pub fn parse_embedded_object(text: &str) -> Result<Value, AiError> {
    let cleaned = strip_code_fences(text);
    let sliced = slice_json_object(cleaned).ok_or_else(|| AiError::Parse {
        message: "no JSON object found in model output".to_string(),
        raw: text.to_string(),
    })?;
    serde_json::from_str(sliced).map_err(|e| AiError::Parse {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

/// Parse the bracket-delimited JSON array embedded in chatty model output
pub fn parse_embedded_array(text: &str) -> Result<Value, AiError> {
    let cleaned = strip_code_fences(text);
    let sliced = slice_json_array(cleaned).ok_or_else(|| AiError::Parse {
        message: "no JSON array found in model output".to_string(),
        raw: text.to_string(),
    })?;
    serde_json::from_str(sliced).map_err(|e| AiError::Parse {
        message: e.to_string(),
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let text = "```json\n{\"quote\": \"Rest well.\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"quote\": \"Rest well.\"}");
    }

    #[test]
    fn strips_plain_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn parses_object_with_chatty_preamble() {
        let text = "Here is your checklist:\n{\"immunizations\": [\"typhoid\"], \"hydration\": \"3L daily\"}\nStay safe!";
        let value = parse_embedded_object(text).unwrap();
        assert_eq!(value["hydration"], "3L daily");
    }

    #[test]
    fn parses_array_with_surrounding_prose() {
        let text = "Your session:\n[{\"name\": \"Sukhasana\", \"duration\": \"2 minutes\"}]\nEnjoy.";
        let value = parse_embedded_array(text).unwrap();
        assert_eq!(value[0]["name"], "Sukhasana");
    }

    #[test]
    fn parses_fenced_object() {
        let text = "```json\n{\"medicine\": \"Paracetamol\"}\n```";
        let value = parse_json(text).unwrap();
        assert_eq!(value["medicine"], "Paracetamol");
    }

    #[test]
    fn parse_failure_preserves_raw_text() {
        let text = "I cannot answer that.";
        let err = parse_embedded_object(text).unwrap_err();
        match err {
            AiError::Parse { raw, .. } => assert_eq!(raw, text),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn slice_ignores_mismatched_braces() {
        assert!(slice_json_object("} no object {").is_none());
        assert!(slice_json_array("] no array [").is_none());
    }

    #[test]
    fn typed_parse_reads_struct() {
        #[derive(serde::Deserialize)]
        struct Quote {
            quote: String,
            author: String,
        }
        let text = "```json\n{\"quote\": \"Health is wealth.\", \"author\": \"Proverb\"}\n```";
        let parsed: Quote = parse_json_as(text).unwrap();
        assert_eq!(parsed.quote, "Health is wealth.");
        assert_eq!(parsed.author, "Proverb");
    }
}
