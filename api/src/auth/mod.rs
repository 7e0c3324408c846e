//! Authentication for admin routes

mod api_key;

pub use api_key::admin_middleware;
