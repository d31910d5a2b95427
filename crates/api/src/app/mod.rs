//! HTTP application wiring (axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: repository wiring shared by all handlers
//! - `links.rs`: route registry used for dispatch and link building
//! - `routes/`: the two controller sets (`web` plain JSON, `hateoas` envelopes)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use hypershop_core::DomainResult;

pub mod errors;
pub mod links;
pub mod routes;
pub mod services;

/// Deployment mode: which controller set answers the domain routes.
///
/// The two sets cover the same paths with different representations, so
/// exactly one of them is registered per process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Plain JSON representations of the domain objects.
    Web,
    /// Resource envelopes with hypermedia links.
    Hateoas,
}

impl Mode {
    /// Reads the mode from `APP_MODE`, falling back to [`Mode::Web`].
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE") {
            Ok(value) if value.eq_ignore_ascii_case("web") => Mode::Web,
            Ok(value) if value.eq_ignore_ascii_case("hateoas") => Mode::Hateoas,
            Ok(value) => {
                tracing::warn!(%value, "unrecognized APP_MODE; defaulting to web");
                Mode::Web
            }
            Err(_) => {
                tracing::warn!("APP_MODE not set; defaulting to web");
                Mode::Web
            }
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Mode::Web => "web",
            Mode::Hateoas => "hateoas",
        })
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(mode: Mode) -> DomainResult<Router> {
    let services = Arc::new(services::build_services()?);

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router(mode).layer(Extension(services))))
}
