use std::collections::HashMap;

use tera::Tera;

use crate::config::{DEFAULT_TRUNCATE_WORDS, MINUTES_PER_HOUR};

/// Templates the route table renders. All must be present at startup.
pub const REQUIRED_TEMPLATES: &[&str] = &[
    "base.html",
    "index.html",
    "courses.html",
    "course.html",
    "about.html",
    "contact.html",
    "not_found.html",
];

/// Initialize the Tera template engine from a glob
pub fn init_templates(glob: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(glob)?;

    tera.register_filter("truncate_words", truncate_words_filter);
    tera.register_filter("duration", duration_filter);

    Ok(tera)
}

/// Names from `REQUIRED_TEMPLATES` that the engine did not load
pub fn missing_templates(tera: &Tera) -> Vec<&'static str> {
    let loaded: Vec<&str> = tera.get_template_names().collect();
    REQUIRED_TEMPLATES
        .iter()
        .copied()
        .filter(|name| !loaded.contains(name))
        .collect()
}

/// Truncate text to a certain number of words
fn truncate_words_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("truncate_words filter expects a string"))?;

    let count = args
        .get("count")
        .and_then(|v| v.as_u64())
        .unwrap_or(DEFAULT_TRUNCATE_WORDS as u64) as usize;

    let words: Vec<&str> = s.split_whitespace().collect();
    if words.len() <= count {
        Ok(tera::Value::String(s.to_string()))
    } else {
        let truncated = words[..count].join(" ");
        Ok(tera::Value::String(format!("{}...", truncated)))
    }
}

/// Render a number of minutes as "1h 30m", "45m" or "2h"
fn duration_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let minutes = value
        .as_u64()
        .ok_or_else(|| tera::Error::msg("duration filter expects a non-negative integer"))?;

    Ok(tera::Value::String(format_duration(minutes)))
}

fn format_duration(minutes: u64) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let rest = minutes % MINUTES_PER_HOUR;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(
        filter: fn(&tera::Value, &HashMap<String, tera::Value>) -> tera::Result<tera::Value>,
        value: tera::Value,
        args: &[(&str, tera::Value)],
    ) -> tera::Result<tera::Value> {
        let args = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        filter(&value, &args)
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(90), "1h 30m");
    }

    #[test]
    fn test_duration_filter_rejects_strings() {
        assert!(call(duration_filter, tera::Value::from("ninety"), &[]).is_err());
    }

    #[test]
    fn test_truncate_words_short_text_unchanged() {
        let out = call(truncate_words_filter, tera::Value::from("two words"), &[]).unwrap();
        assert_eq!(out, tera::Value::from("two words"));
    }

    #[test]
    fn test_truncate_words_with_count() {
        let out = call(
            truncate_words_filter,
            tera::Value::from("one two three four"),
            &[("count", tera::Value::from(2))],
        )
        .unwrap();
        assert_eq!(out, tera::Value::from("one two..."));
    }

    #[test]
    fn test_filters_registered() {
        let dir = tempfile::tempdir().unwrap();
        let glob = format!("{}/**/*", dir.path().display());
        let mut tera = init_templates(&glob).unwrap();
        tera.add_raw_template("t", "{{ 75 | duration }}").unwrap();
        let out = tera.render("t", &tera::Context::new()).unwrap();
        assert_eq!(out, "1h 15m");
    }

    #[test]
    fn test_missing_templates_reports_absent_names() {
        let mut tera = Tera::default();
        tera.add_raw_template("base.html", "").unwrap();
        let missing = missing_templates(&tera);
        assert!(!missing.contains(&"base.html"));
        assert!(missing.contains(&"index.html"));
        assert_eq!(missing.len(), REQUIRED_TEMPLATES.len() - 1);
    }
}
