//! Bearer token validation.
//!
//! Tokens are issued by an external identity provider; this server only
//! verifies them. See [`jwt`].

pub mod jwt;
