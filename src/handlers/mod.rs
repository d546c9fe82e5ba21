//! HTTP-layer plumbing shared by the route handlers.

pub mod http;
