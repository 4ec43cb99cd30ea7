//! Public waitlist intake for prospective brands and creators.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/waitlist` | No | Submit a waitlist form |
//!
//! Entries start as `pending`. The `extra` object is stored as-is.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WaitlistService;
