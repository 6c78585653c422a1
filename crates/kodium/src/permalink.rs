use std::fmt;

use url::Url;

/// An absolute URL to a location on the site.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Permalink(Url);

impl Permalink {
    /// Resolves a site-relative path against the site's base URL.
    ///
    /// Paths other than the root get a trailing slash, since every location is
    /// published as a directory with an `index.html`. File paths (those with an
    /// extension in their last segment) are left as-is.
    pub fn from_path(base_url: &Url, path: &str) -> Result<Self, url::ParseError> {
        let path = path.trim_start_matches('/');
        let is_file = path
            .rsplit('/')
            .next()
            .map_or(false, |segment| segment.contains('.'));

        let suffix = if path.is_empty() || path.ends_with('/') || is_file {
            ""
        } else {
            "/"
        };

        base_url.join(&format!("/{path}{suffix}")).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base(url: &str) -> Url {
        url.parse().unwrap()
    }

    #[test]
    fn test_permalink() {
        assert_eq!(
            Permalink::from_path(&base("https://example.com/"), "/").unwrap(),
            Permalink("https://example.com/".parse().unwrap())
        );
        assert_eq!(
            Permalink::from_path(&base("https://example.com"), "").unwrap(),
            Permalink("https://example.com/".parse().unwrap())
        );
        assert_eq!(
            Permalink::from_path(&base("http://kodium.mk"), "/posts/hello")
                .unwrap()
                .as_str(),
            "http://kodium.mk/posts/hello/"
        );
    }

    #[test]
    fn test_file_permalink() {
        assert_eq!(
            Permalink::from_path(&base("http://kodium.mk"), "/feed.rss")
                .unwrap()
                .as_str(),
            "http://kodium.mk/feed.rss"
        );
    }

    #[test]
    fn test_permalink_path() {
        let permalink = Permalink("https://example.com/this/is/a/cool/site/".parse().unwrap());
        assert_eq!(permalink.path(), "/this/is/a/cool/site/");
    }
}
