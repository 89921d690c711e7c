pub mod handlers;
pub mod pipeline;
pub mod routes;
pub mod services;
