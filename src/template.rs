//! Placeholder substitution for style templates
//!
//! Style templates carry two placeholders, `{{ value }}` and `{{ url }}`.
//! Whitespace inside the braces is optional, so `{{value}}` works too.
//! Any other `{{ name }}` is left in place untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching any template variable: {{ name }}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").unwrap());

/// Placeholder replaced by the rendered value (page number or label)
pub const VALUE: &str = "value";

/// Placeholder replaced by the link target
pub const URL: &str = "url";

/// Replace every `{{ value }}` and `{{ url }}` in `template`
pub fn substitute(template: &str, value: &str, url: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &regex::Captures<'_>| {
            match caps.get(1).map(|m| m.as_str()) {
                Some(VALUE) => value.to_string(),
                Some(URL) => url.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Check if a string contains template variables
pub fn has_placeholders(s: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(s)
}

/// Check if a template references a specific placeholder
pub fn uses(template: &str, name: &str) -> bool {
    placeholders(template).iter().any(|p| p == name)
}

/// Extract all placeholder names from a template
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let result = substitute(
            r#"<li><a href="{{ url }}">{{ value }}</a></li>"#,
            "4",
            "/posts?page=4of9",
        );
        assert_eq!(result, r#"<li><a href="/posts?page=4of9">4</a></li>"#);
    }

    #[test]
    fn test_repeated_placeholders() {
        let result = substitute("{{ value }}-{{ value }} {{ url }}{{ url }}", "x", "u");
        assert_eq!(result, "x-x uu");
    }

    #[test]
    fn test_whitespace_in_template() {
        assert_eq!(substitute("{{value}}", "7", ""), "7");
        assert_eq!(substitute("{{ value }}", "7", ""), "7");
        assert_eq!(substitute("{{  value  }}", "7", ""), "7");
    }

    #[test]
    fn test_unknown_placeholder_left_as_is() {
        assert_eq!(
            substitute("{{ title }}: {{ value }}", "Next", "/n"),
            "{{ title }}: Next"
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(substitute("&hellip;", "ignored", "ignored"), "&hellip;");
    }

    #[test]
    fn test_value_is_not_rescanned() {
        // A label that itself looks like a placeholder is inserted verbatim
        assert_eq!(substitute("<b>{{ value }}</b>", "{{ url }}", "/x"), "<b>{{ url }}</b>");
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("{{ value }}"));
        assert!(has_placeholders("prefix {{url}} suffix"));
        assert!(!has_placeholders("&laquo;"));
        assert!(!has_placeholders("{ not a template }"));
    }

    #[test]
    fn test_placeholders_and_uses() {
        let template = r#"<a href="{{ url }}">{{ value }}</a>"#;
        assert_eq!(placeholders(template), vec!["url", "value"]);
        assert!(uses(template, URL));
        assert!(uses(template, VALUE));
        assert!(!uses("<span>{{ value }}</span>", URL));
    }
}
