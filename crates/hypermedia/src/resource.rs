//! Resource envelopes: a payload plus an ordered bag of links.

use serde::Serialize;

use crate::link::Link;

/// Single-item envelope. The payload's fields are flattened next to the
/// `links` array; a `Resource<Option<T>>` around `None` serializes as a
/// links-only object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource<T> {
    #[serde(flatten)]
    content: T,
    links: Vec<Link>,
}

impl<T> Resource<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Vec::new(),
        }
    }

    /// Appends a link. Insertion order is kept; duplicates are allowed.
    pub fn add(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Chaining variant of [`Resource::add`].
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// Collection envelope: items under `content` plus the collection's links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resources<T> {
    content: Vec<T>,
    links: Vec<Link>,
}

impl<T> Resources<T> {
    pub fn new(content: Vec<T>) -> Self {
        Self {
            content,
            links: Vec::new(),
        }
    }

    /// Appends a link. Insertion order is kept; duplicates are allowed.
    pub fn add(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Chaining variant of [`Resources::add`].
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}
