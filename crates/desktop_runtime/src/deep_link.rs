//! Launch requests carried in the page URL, e.g. `?open=/Applications/Contact.app`.

/// Query key whose values are launch paths.
pub const OPEN_QUERY_KEY: &str = "open";

/// Returns every `open=` value in `query`, form-decoded, in query order.
///
/// Blank values are skipped. Malformed escapes are kept as literal text, so they never decode
/// into control bytes and fail launch-path validation instead.
pub fn parse_open_targets(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .filter(|(key, _)| key == OPEN_QUERY_KEY)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Returns the launch paths requested by the current page URL.
pub fn current_open_targets() -> Vec<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| parse_open_targets(&search))
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collects_every_open_value_in_order() {
        assert_eq!(
            parse_open_targets("?open=/Applications/About.app&lang=en&open=%2FApplications%2FSnake.app"),
            vec![
                "/Applications/About.app".to_string(),
                "/Applications/Snake.app".to_string()
            ]
        );
    }

    #[test]
    fn skips_blank_values_and_decodes_plus_as_space() {
        assert_eq!(parse_open_targets("open=&open&open=+"), Vec::<String>::new());
        assert_eq!(
            parse_open_targets("open=/My+Apps/Notes.app"),
            vec!["/My Apps/Notes.app".to_string()]
        );
    }

    #[test]
    fn malformed_escapes_stay_literal() {
        assert_eq!(
            parse_open_targets("open=/Applications/A%+2pp.app&open=%+41bout&open=%ZZ"),
            vec![
                "/Applications/A% 2pp.app".to_string(),
                "% 41bout".to_string(),
                "%ZZ".to_string()
            ]
        );
        assert!(parse_open_targets("open=%+2")
            .iter()
            .all(|target| !target.chars().any(char::is_control)));
    }
}
