//! Contract generation HTTP area.

mod dto;
mod handlers;
mod routes;

pub use routes::contract_routes;
