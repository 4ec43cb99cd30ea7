//! Campaigns posted by brands.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/campaigns` | No | Paginated listing with brand summary |
//! | GET | `/api/campaigns/{id}` | No | Campaign details |
//! | POST | `/api/campaigns` | Yes | Create campaign (brand) |
//! | PATCH | `/api/campaigns/{id}` | Yes | Update campaign (owning brand) |
//! | GET | `/api/campaigns/my` | Yes | Own campaigns (brand) |
//!
//! ## Status lifecycle
//!
//! `draft → active | cancelled`, `active → completed | cancelled`. Completed
//! and cancelled are terminal. A permissive policy can be configured that
//! accepts any status change.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CampaignService;
