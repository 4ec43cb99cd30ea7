//! Role/profile lookup for verified identities.
//!
//! A verified identity is bound to at most one profile, created once at
//! onboarding. The profile's role decides which role record (brand or
//! creator) the identity acts through.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/profiles/me` | Yes | Own profile and role record |
//! | PATCH | `/api/profiles/me` | Yes | Update own brand/creator record |

pub mod actor;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use actor::Actor;
pub use services::ProfileService;
