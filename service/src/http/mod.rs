//! HTTP plumbing shared by the server and the integration tests.

pub mod security;

pub use security::{build_security_headers, with_security_headers};
