//! Detection and removal of the `/pt` locale segment.

/// Path segment that marks Portuguese pages.
pub const LOCALE_PREFIX: &str = "/pt";

/// True when `path` starts with the `/pt` segment: `/pt`, `/pt/...`, `/pt?...`
/// or `/pt#...`. `/ptolemy` does not count.
pub fn has_locale_prefix(path: &str) -> bool {
    match path.strip_prefix(LOCALE_PREFIX) {
        Some(rest) => matches!(rest.chars().next(), None | Some('/' | '?' | '#')),
        None => false,
    }
}

/// Removes a leading `/pt` segment, returning the remainder untouched
/// (`/pt/events` → `/events`, `/pt` → `""`, `/ptolemy` → `/ptolemy`).
pub fn strip_locale_prefix(path: &str) -> &str {
    if has_locale_prefix(path) {
        &path[LOCALE_PREFIX.len()..]
    } else {
        path
    }
}

/// Raw three-character strip kept for the legacy hreflang helper, which has to
/// stay byte-stable. Unlike [`strip_locale_prefix`] it also cuts `/ptolemy`.
pub fn strip_legacy_locale_prefix(path: &str) -> &str {
    path.strip_prefix(LOCALE_PREFIX).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_segment_prefix() {
        assert!(has_locale_prefix("/pt"));
        assert!(has_locale_prefix("/pt/"));
        assert!(has_locale_prefix("/pt/eventos"));
        assert!(has_locale_prefix("/pt?ref=nav"));
        assert!(has_locale_prefix("/pt#top"));
    }

    #[test]
    fn ignores_lookalikes() {
        assert!(!has_locale_prefix("/ptolemy"));
        assert!(!has_locale_prefix("/events/pt"));
        assert!(!has_locale_prefix("pt/eventos"));
        assert!(!has_locale_prefix(""));
    }

    #[test]
    fn strip_segment() {
        assert_eq!(strip_locale_prefix("/pt/eventos"), "/eventos");
        assert_eq!(strip_locale_prefix("/pt"), "");
        assert_eq!(strip_locale_prefix("/pt?x=1"), "?x=1");
        assert_eq!(strip_locale_prefix("/ptolemy"), "/ptolemy");
        assert_eq!(strip_locale_prefix("/music/pt"), "/music/pt");
    }

    #[test]
    fn legacy_strip_is_raw() {
        assert_eq!(strip_legacy_locale_prefix("/pt/eventos"), "/eventos");
        assert_eq!(strip_legacy_locale_prefix("/ptolemy"), "olemy");
        assert_eq!(strip_legacy_locale_prefix("/events"), "/events");
    }
}
