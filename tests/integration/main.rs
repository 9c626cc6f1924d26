//! Integration tests: entity stores against in-process HTTP servers

mod fixture_server;
mod store_flow;
mod support;
