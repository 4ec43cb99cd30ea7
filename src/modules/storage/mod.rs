//! Storage module for submission media
//!
//! Provides a MinIO/S3-compatible client that presigns direct uploads.

mod minio_client;

pub use minio_client::{MinIOClient, PresignedUpload};
