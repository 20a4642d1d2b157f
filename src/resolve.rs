use url::Url;

/// Convert a relative reference like `./index.htm`, `../index.htm` or
/// `/index.htm` to an absolute URL against a base ("father") URL like
/// `https://www.example.com/news/` (trailing slash optional).
///
/// The base must sit at the level the reference backs out to: a `./x`
/// reference wants the containing directory, each extra `../` wants one
/// level higher, and a `/x` reference wants the site root. The function does
/// not validate this alignment; a mismatched base produces a wrong but
/// syntactically plausible URL.
pub fn rel_to_abs(rel: &str, base: &str) -> String {
    if rel.starts_with('/') {
        // Standard join semantics would re-resolve a root-relative reference
        // against the host root and drop any path carried by the base, so
        // this branch concatenates the strings directly instead. No separator
        // is inserted or removed beyond stripping one trailing slash.
        let trimmed = base.strip_suffix('/').unwrap_or(base);
        return format!("{trimmed}{rel}");
    }
    match Url::parse(base) {
        Ok(base_url) => match base_url.join(rel) {
            Ok(abs) => abs.to_string(),
            Err(_) => rel.to_string(),
        },
        // Scheme-less bases cannot be parsed as absolute URLs; merge the
        // paths by hand following the same dot-segment rules.
        Err(_) => merge_paths(base, rel),
    }
}

/// Plain-string relative resolution for bases the `url` crate rejects.
/// A base not ending in `/` is treated as a file inside its directory.
fn merge_paths(base: &str, rel: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').collect();
    segments.pop();
    for seg in rel.split('/') {
        match seg {
            "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_level_reference() {
        assert_eq!(
            rel_to_abs("./index.htm", "https://a.com/b/c/"),
            "https://a.com/b/c/index.htm"
        );
    }

    #[test]
    fn one_level_back() {
        assert_eq!(
            rel_to_abs("../index.htm", "https://a.com/b/c/"),
            "https://a.com/b/index.htm"
        );
    }

    #[test]
    fn multi_level_back() {
        assert_eq!(
            rel_to_abs("../../x", "https://a.com/a/b/c/"),
            "https://a.com/a/x"
        );
    }

    #[test]
    fn bare_reference_replaces_last_segment() {
        assert_eq!(rel_to_abs("x", "https://a.com/b/c"), "https://a.com/b/x");
    }

    #[test]
    fn root_relative_is_literal_concatenation() {
        // The root-relative branch never inserts a separator of its own; it
        // strips one trailing slash from the base and concatenates.
        assert_eq!(
            rel_to_abs("/index.htm", "https://a.com"),
            "https://a.com/index.htm"
        );
        assert_eq!(
            rel_to_abs("/index.htm", "https://a.com/"),
            "https://a.com/index.htm"
        );
        // A base that still carries a path is concatenated as-is.
        assert_eq!(
            rel_to_abs("/index.htm", "https://a.com/b/c"),
            "https://a.com/b/c/index.htm"
        );
    }

    #[test]
    fn scheme_less_base_falls_back_to_path_merge() {
        assert_eq!(
            rel_to_abs("./index.htm", "www.example.com/news/"),
            "www.example.com/news/index.htm"
        );
        assert_eq!(
            rel_to_abs("../index.htm", "www.example.com/news/finance/"),
            "www.example.com/news/index.htm"
        );
        // Base without a trailing slash is a file inside its directory.
        assert_eq!(
            rel_to_abs("x.htm", "www.example.com/news/page.htm"),
            "www.example.com/news/x.htm"
        );
    }

    #[test]
    fn result_keeps_base_scheme() {
        let abs = rel_to_abs("./article.htm", "https://a.com/news/");
        assert!(abs.starts_with("https://"));
    }
}
