//! Media URL normalization and helpers shared by gallery and previous-work
//! items

use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const MISSING_MEDIA_URL: &str = "At least one media URL is required";

/// Normalize the media URLs of a submitted item.
///
/// `media_urls` may be a single string, an array, or absent. Array entries
/// that are not non-blank strings are dropped. When nothing usable remains,
/// the legacy single `media_url` field is tried the same way. The result is
/// never empty: an empty list is reported as a validation error.
pub fn coerce_media_urls(media_urls: Option<&Value>, media_url: Option<&Value>) -> AppResult<Vec<String>> {
    let mut urls = collect_urls(media_urls);
    if urls.is_empty() {
        urls = collect_urls(media_url);
    }

    if urls.is_empty() {
        return Err(AppError::Validation(MISSING_MEDIA_URL.to_string()));
    }
    Ok(urls)
}

fn collect_urls(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(url)) => non_blank(url).into_iter().collect(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(non_blank)
            .collect(),
        _ => Vec::new(),
    }
}

fn non_blank(url: &str) -> Option<String> {
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}

/// Trimmed copy of a required text field, `None` when missing or blank
pub fn required_text(value: Option<&str>) -> Option<String> {
    value.and_then(non_blank)
}

/// Optional text field with blank values treated as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loose boolean for flags sent by form-driven clients: `1`, `"true"` and
/// any other non-empty string count as set; `0`, `""`, `false` and null do not
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_string_becomes_one_element_list() {
        let urls = coerce_media_urls(Some(&json!("single-string")), None).unwrap();
        assert_eq!(urls, vec!["single-string"]);
    }

    #[test]
    fn test_array_drops_non_strings_and_blanks() {
        let value = json!(["a.jpg", "", 42, null, "  b.mp4 ", {"url": "c.jpg"}]);
        let urls = coerce_media_urls(Some(&value), None).unwrap();
        assert_eq!(urls, vec!["a.jpg", "b.mp4"]);
    }

    #[test]
    fn test_empty_array_without_fallback_is_rejected() {
        let err = coerce_media_urls(Some(&json!([])), None).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, MISSING_MEDIA_URL),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_falls_back_to_single_media_url() {
        let urls = coerce_media_urls(Some(&json!([])), Some(&json!("legacy.png"))).unwrap();
        assert_eq!(urls, vec!["legacy.png"]);

        let urls = coerce_media_urls(None, Some(&json!("legacy.png"))).unwrap();
        assert_eq!(urls, vec!["legacy.png"]);
    }

    #[test]
    fn test_array_takes_precedence_over_fallback() {
        let urls = coerce_media_urls(Some(&json!(["a.jpg"])), Some(&json!("b.jpg"))).unwrap();
        assert_eq!(urls, vec!["a.jpg"]);
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        assert!(coerce_media_urls(Some(&json!(12)), None).is_err());
        assert!(coerce_media_urls(Some(&json!({"0": "a.jpg"})), None).is_err());
        assert!(coerce_media_urls(Some(&Value::Null), Some(&json!("   "))).is_err());
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text(Some("  Jane ")), Some("Jane".to_string()));
        assert_eq!(required_text(Some("   ")), None);
        assert_eq!(required_text(None), None);
    }

    #[test]
    fn test_truthy_flags() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("true"))));
        assert!(truthy(Some(&json!([]))));
        assert!(!truthy(None));
        assert!(!truthy(Some(&json!(null))));
        assert!(!truthy(Some(&json!(false))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
    }
}
