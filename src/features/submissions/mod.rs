//! Deliverables submitted by creators for accepted applications.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/submissions` | Yes | Submit for own accepted application (creator) |
//! | GET | `/api/submissions` | Yes | Brand: submissions to own campaigns. Creator: own |
//! | POST | `/api/submissions/{id}/approve` | Yes | Approve (owning brand) |
//! | POST | `/api/submissions/{id}/reject` | Yes | Reject (owning brand) |
//! | GET | `/api/submissions/presign` | Yes | Presigned upload URL for media |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SubmissionService;
