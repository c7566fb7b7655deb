/// Formats the probe counter the way the counter button displays it:
/// `"current/total"` once known, `"?"` before the first server report.
pub fn format_probe_counter(counter: Option<(u32, u32)>) -> String {
    match counter {
        Some((current, total)) => format!("{current}/{total}"),
        None => "?".to_owned(),
    }
}

/// Masks an API key for display on the settings page, keeping only a short
/// recognizable prefix.
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "not set".to_owned();
    }
    let visible: String = key.chars().take(4).collect();
    format!("{visible}\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::{format_probe_counter, mask_api_key};

    #[test]
    fn counter_renders_as_current_over_total() {
        assert_eq!(format_probe_counter(Some((3, 10))), "3/10");
        assert_eq!(format_probe_counter(Some((0, 5))), "0/5");
    }

    #[test]
    fn unknown_counter_renders_as_placeholder() {
        assert_eq!(format_probe_counter(None), "?");
    }

    #[test]
    fn api_key_is_masked() {
        assert_eq!(mask_api_key(""), "not set");
        assert_eq!(mask_api_key("ABCDEFGH"), "ABCD\u{2026}");
        assert_eq!(mask_api_key("AB"), "AB\u{2026}");
    }
}
