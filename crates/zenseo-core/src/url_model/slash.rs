//! Trailing-slash normalization for routes and fully-qualified URLs.

/// Appends the trailing slash the site's canonical routes carry.
///
/// - `""` becomes `"/"`.
/// - Input already ending in `/` is returned as is.
/// - With a query or fragment, the slash goes right before the first `?`/`#`
///   (`/events?x=1` → `/events/?x=1`). The part before the delimiter is not
///   inspected, so `/a/?x` gains a second slash.
/// - A final segment that looks like a file (`.xml`, `.webp`, ...: a dot and
///   2–4 ASCII alphanumerics) is left alone.
/// - Anything else gets a `/` appended.
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.is_empty() {
        return "/".to_string();
    }
    if url.ends_with('/') {
        return url.to_string();
    }
    if let Some(idx) = url.find(|c: char| c == '?' || c == '#') {
        let (base, rest) = url.split_at(idx);
        return format!("{base}/{rest}");
    }
    if has_file_extension(url) {
        return url.to_string();
    }
    format!("{url}/")
}

/// Last path segment. The authority of an absolute URL is not a segment,
/// so `https://example.com` has an empty one.
fn final_segment(url: &str) -> &str {
    let path = match url.find("://") {
        Some(i) => {
            let after_scheme = &url[i + 3..];
            match after_scheme.find('/') {
                Some(j) => &after_scheme[j..],
                None => "",
            }
        }
        None => url,
    };
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

fn has_file_extension(url: &str) -> bool {
    let segment = final_segment(url);
    match segment.rfind('.') {
        Some(dot) => {
            let ext = &segment[dot + 1..];
            (2..=4).contains(&ext.len()) && ext.bytes().all(|b| b.is_ascii_alphanumeric())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_root() {
        assert_eq!(ensure_trailing_slash(""), "/");
    }

    #[test]
    fn appends_slash() {
        assert_eq!(ensure_trailing_slash("/events"), "/events/");
        assert_eq!(ensure_trailing_slash("/pt/eventos/42"), "/pt/eventos/42/");
        assert_eq!(ensure_trailing_slash("about"), "about/");
    }

    #[test]
    fn already_slashed_unchanged() {
        assert_eq!(ensure_trailing_slash("/"), "/");
        assert_eq!(ensure_trailing_slash("/music/"), "/music/");
        assert_eq!(
            ensure_trailing_slash("https://example.com/pt/"),
            "https://example.com/pt/"
        );
    }

    #[test]
    fn slash_goes_before_query_or_fragment() {
        assert_eq!(ensure_trailing_slash("/events?x=1"), "/events/?x=1");
        assert_eq!(ensure_trailing_slash("/faq#refunds"), "/faq/#refunds");
        assert_eq!(ensure_trailing_slash("/a?b=1#c"), "/a/?b=1#c");
        assert_eq!(ensure_trailing_slash("/a#frag?not-a-query"), "/a/#frag?not-a-query");
    }

    #[test]
    fn query_base_not_revalidated() {
        assert_eq!(ensure_trailing_slash("/a/?x=1#top"), "/a//?x=1#top");
        assert_eq!(ensure_trailing_slash("?x=1"), "/?x=1");
        assert_eq!(ensure_trailing_slash("/sitemap.xml?v=2"), "/sitemap.xml/?v=2");
    }

    #[test]
    fn file_like_segments_untouched() {
        assert_eq!(ensure_trailing_slash("/sitemap.xml"), "/sitemap.xml");
        assert_eq!(ensure_trailing_slash("/images/og.WEBP"), "/images/og.WEBP");
        assert_eq!(ensure_trailing_slash("/robots.txt"), "/robots.txt");
        assert_eq!(ensure_trailing_slash("/archive.tar.gz"), "/archive.tar.gz");
    }

    #[test]
    fn extension_must_be_two_to_four_alphanumerics() {
        assert_eq!(ensure_trailing_slash("/v1.2"), "/v1.2/");
        assert_eq!(ensure_trailing_slash("/page.html5x"), "/page.html5x/");
        assert_eq!(ensure_trailing_slash("/a.b-c"), "/a.b-c/");
        assert_eq!(ensure_trailing_slash("/dir.d/file"), "/dir.d/file/");
    }

    #[test]
    fn host_is_not_a_file() {
        assert_eq!(ensure_trailing_slash("https://example.com"), "https://example.com/");
        assert_eq!(
            ensure_trailing_slash("https://example.com/feed.xml"),
            "https://example.com/feed.xml"
        );
        assert_eq!(
            ensure_trailing_slash("https://example.com/pt"),
            "https://example.com/pt/"
        );
    }

    #[test]
    fn plain_paths_get_exactly_one_slash() {
        for p in ["/x", "/tribo-zen", "/shop/product/abc", "relative/path", "/pt"] {
            assert_eq!(ensure_trailing_slash(p), format!("{p}/"));
        }
    }
}
