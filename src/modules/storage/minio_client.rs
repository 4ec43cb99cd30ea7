//! MinIO/S3-compatible storage client
//!
//! Issues presigned `PUT` URLs so clients upload submission media straight to
//! the bucket. Signing is local; constructing the client and presigning never
//! touch the network.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use s3::creds::Credentials;
use s3::{Bucket, Region};
use serde::Serialize;
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::config::MinIOConfig;
use crate::core::error::AppError;

/// Longest extension kept from a client-supplied filename
const MAX_EXTENSION_LEN: usize = 10;

/// Upload target handed to the client
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PresignedUpload {
    /// Presigned URL to `PUT` the file body to
    pub upload_url: String,
    /// Object key inside the bucket
    pub key: String,
    /// URL to store as the submission `file_url` once the upload succeeds
    pub file_url: String,
    pub method: String,
    pub content_type: String,
    /// Seconds until `upload_url` stops working
    pub expires_in: u32,
}

/// MinIO/S3-compatible storage client
pub struct MinIOClient {
    bucket: Box<Bucket>,
    presigned_url_expiry_secs: u32,
    endpoint: String,
    public_endpoint: String,
    upload_prefix: String,
}

impl MinIOClient {
    /// Create a new MinIO client from configuration
    pub fn new(config: MinIOConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| AppError::Internal(format!("Failed to create MinIO bucket: {}", e)))?;

        // Use path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        let client = Self {
            bucket,
            presigned_url_expiry_secs: config.presigned_url_expiry_secs,
            endpoint: config.endpoint,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            upload_prefix: config.upload_prefix.trim_matches('/').to_string(),
        };

        info!(
            "MinIO client initialized for endpoint: {}, bucket: {}, upload_prefix: {}",
            client.endpoint,
            client.bucket.name(),
            client.upload_prefix
        );

        Ok(client)
    }

    /// Build a fresh object key for an upload owned by `user_id`
    ///
    /// Format: `{upload_prefix}/{user_id}/{uuid_v7}.{ext}`
    pub fn generate_key(&self, user_id: Uuid, filename: Option<&str>, content_type: &str) -> String {
        let ext = filename
            .and_then(extension_from_filename)
            .or_else(|| extension_from_content_type(content_type))
            .unwrap_or_else(|| "bin".to_string());

        format!(
            "{}/{}/{}.{}",
            self.upload_prefix,
            user_id,
            Uuid::now_v7(),
            ext
        )
    }

    /// Presign an upload for `user_id`
    pub async fn presign_upload(
        &self,
        user_id: Uuid,
        filename: Option<&str>,
        content_type: &str,
    ) -> Result<PresignedUpload, AppError> {
        let key = self.generate_key(user_id, filename, content_type);

        let upload_url = self
            .bucket
            .presign_put(&key, self.presigned_url_expiry_secs, None, None)
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Failed to generate presigned upload URL for '{}': {}",
                    key, e
                ))
            })?;

        debug!("Presigned upload for '{}' in bucket '{}'", key, self.bucket.name());

        Ok(PresignedUpload {
            upload_url,
            file_url: self.get_public_url(&key),
            key,
            method: "PUT".to_string(),
            content_type: content_type.to_string(),
            expires_in: self.presigned_url_expiry_secs,
        })
    }

    /// Get the public URL for a file
    pub fn get_public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Get the bucket name
    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

fn extension_from_filename(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn extension_from_content_type(content_type: &str) -> Option<String> {
    let ext = match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/heic" => "heic",
        "video/mp4" => "mp4",
        "video/quicktime" => "mov",
        "video/webm" => "webm",
        "video/x-msvideo" => "avi",
        _ => return None,
    };
    Some(ext.to_string())
}
