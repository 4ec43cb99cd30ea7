//! Creator applications to campaigns.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/campaigns/{id}/apply` | Yes | Apply to an active campaign (creator) |
//! | GET | `/api/campaigns/{id}/applications` | Yes | Applications to a campaign (owning brand) |
//! | POST | `/api/applications/{id}/accept` | Yes | Accept (owning brand, campaign active) |
//! | POST | `/api/applications/{id}/reject` | Yes | Reject (owning brand) |
//! | GET | `/api/applications/my` | Yes | Own applications (creator) |
//!
//! A creator applies at most once per campaign. Only `applied` applications
//! can be accepted or rejected.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ApplicationService;
