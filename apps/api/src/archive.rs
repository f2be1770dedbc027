//! Resume archive: uploaded files copied to S3 (MinIO locally).

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::config::S3Config;

#[derive(Clone)]
pub struct ResumeArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl ResumeArchive {
    pub async fn from_config(config: &S3Config) -> Self {
        Self {
            client: build_s3_client(config).await,
            bucket: config.bucket.clone(),
        }
    }

    /// Stores the original upload and returns its object key.
    pub async fn store(
        &self,
        candidate_id: Uuid,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<String> {
        let key = archive_key(candidate_id, file_name);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Archived resume to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

/// `resumes/{candidate_id}/{file_name}`, keeping only the last path segment of
/// the client-supplied name.
pub fn archive_key(candidate_id: Uuid, file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty() && *s != "..")
        .unwrap_or("resume");
    format!("resumes/{candidate_id}/{base}")
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &S3Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "intervue-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
