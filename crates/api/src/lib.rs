//! HTTP API: server bootstrap, routing, and representation mapping.

pub mod app;
