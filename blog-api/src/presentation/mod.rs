pub mod http_handlers;
pub mod routes;

pub use routes::configure;
