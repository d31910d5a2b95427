//! Links and the builder producing them.

use core::fmt;

use serde::Serialize;

/// Relation name for a resource's canonical location.
pub const SELF_REL: &str = "self";

/// A single outbound link: a relation name plus the target href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    rel: String,
    href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

/// RFC 5988 web-linking form, usable as a `Link` header value.
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>; rel=\"{}\"", self.href, self.rel)
    }
}

/// Assembles an href from a base path and appended segments, then tags it
/// with a relation to finish as a [`Link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    href: String,
}

impl LinkBuilder {
    /// Starts from a literal base path.
    pub fn new(base: impl Into<String>) -> Self {
        Self { href: base.into() }
    }

    /// Appends one path segment, normalizing surrounding slashes.
    pub fn slash(mut self, segment: impl fmt::Display) -> Self {
        let segment = segment.to_string();
        let trimmed = segment.trim_matches('/');
        if !trimmed.is_empty() {
            if !self.href.ends_with('/') {
                self.href.push('/');
            }
            self.href.push_str(trimmed);
        }
        self
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Finishes the builder as a link with the given relation.
    pub fn with_rel(self, rel: impl Into<String>) -> Link {
        Link::new(rel, self.href)
    }

    /// Finishes the builder as a `self` link.
    pub fn with_self_rel(self) -> Link {
        self.with_rel(SELF_REL)
    }
}
