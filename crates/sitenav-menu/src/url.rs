//! Link targets for menu items.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use sitenav_sitemap::SitemapNode;

/// Characters escaped in a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Produces the `href` for a sitemap node.
///
/// Implemented for any `Fn(&SitemapNode) -> String`, so a closure can stand
/// in for the default [`BaseUrl`] factory.
pub trait UrlFactory: Send + Sync {
    fn url_for(&self, node: &SitemapNode) -> String;
}

impl<F> UrlFactory for F
where
    F: Fn(&SitemapNode) -> String + Send + Sync,
{
    fn url_for(&self, node: &SitemapNode) -> String {
        self(node)
    }
}

/// Default factory: node path segments below the root, joined onto a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    base: String,
}

impl BaseUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new("/")
    }
}

impl UrlFactory for BaseUrl {
    fn url_for(&self, node: &SitemapNode) -> String {
        let mut segments = node.segments().skip(1).peekable();
        if segments.peek().is_none() {
            return self.base.clone();
        }

        let mut url = self.base.trim_end_matches('/').to_owned();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, SEGMENT));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_maps_to_base() {
        let node = SitemapNode::new("root", "Home", 1);

        assert_eq!(BaseUrl::default().url_for(&node), "/");
        assert_eq!(BaseUrl::new("/site/").url_for(&node), "/site/");
    }

    #[test]
    fn test_nested_node() {
        let node = SitemapNode::new("root.about.team", "Team", 1);

        assert_eq!(BaseUrl::default().url_for(&node), "/about/team");
    }

    #[test]
    fn test_base_with_host() {
        let node = SitemapNode::new("root.gallery", "Gallery", 1);

        assert_eq!(
            BaseUrl::new("https://example.com/site/").url_for(&node),
            "https://example.com/site/gallery"
        );
    }

    #[test]
    fn test_segments_are_encoded() {
        let node = SitemapNode::new("root.big news", "News", 1);

        assert_eq!(BaseUrl::default().url_for(&node), "/big%20news");
    }

    #[test]
    fn test_closure_factory() {
        let factory = |node: &SitemapNode| format!("#{}", node.id());
        let node = SitemapNode::new("root.gallery", "Gallery", 7);

        assert_eq!(factory.url_for(&node), "#7");
    }
}
