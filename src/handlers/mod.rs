pub mod health_handler;
pub mod mcq_handler;

pub use health_handler::{health_check, health_check_live};
pub use mcq_handler::{generate_json, generate_page, index};

use actix_web::web;

/// Registers every route on an actix `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(generate_page)
        .service(generate_json)
        .service(health_check)
        .service(health_check_live);
}
