//! Read-only admin surface.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/admin/stats` | Admin | Platform counts |
//! | GET | `/api/admin/users` | Admin | Profiles, newest first |
//! | GET | `/api/admin/campaigns` | Admin | Campaigns in every status |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
