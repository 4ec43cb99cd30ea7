//! Identity resolution and onboarding.
//!
//! Credentials are issued and owned by the external identity provider; this
//! feature only verifies them and binds the identity to a marketplace role.

pub mod dto;
pub mod handlers;
pub mod identity;
pub mod model;
pub mod routes;

pub use identity::IdentityResolver;
