//! Hypermedia building blocks: links, resource envelopes, and the
//! template-expanding link builder.
//!
//! Nothing in here knows about the domain or the web framework; the API
//! crate supplies the route templates and wraps its own payloads.

pub mod link;
pub mod resource;
pub mod template;

pub use link::{Link, LinkBuilder, SELF_REL};
pub use resource::{Resource, Resources};
pub use template::{ExpandError, expand};
