use axum::Router;

use crate::app::Mode;

pub mod hateoas;
pub mod system;
pub mod web;

/// Router for the domain endpoints of the selected mode.
pub fn router(mode: Mode) -> Router {
    match mode {
        Mode::Web => web::router(),
        Mode::Hateoas => hateoas::router(),
    }
}
