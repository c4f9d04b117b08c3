pub mod common;
pub mod guard_routes;
