//! Request path segments.

use percent_encoding::percent_decode_str;

/// Path of the current request, split into segments.
///
/// Keeps two views of the path:
/// - raw segments, exactly as split on `/` (a trailing slash yields a final
///   empty segment), used to locate the menu's start node
/// - non-empty segments, used for highlighting and depth anchors
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestPath {
    raw: Vec<String>,
}

impl RequestPath {
    /// Parse a URL path such as `/about/team`.
    ///
    /// Query string and fragment are ignored; segments are percent-decoded.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return Self::default();
        }
        let raw = path
            .split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();
        Self { raw }
    }

    /// Build from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            raw: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Segments as split from the URL, empty ones included.
    #[must_use]
    pub fn raw_segments(&self) -> &[String] {
        &self.raw
    }

    /// Non-empty segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.iter().map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Depth of the request below the root (`/` is 0, `/a/b` is 2).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}
