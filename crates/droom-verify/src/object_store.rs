//! S3 probes for the content bucket.

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::Client;

use crate::error::ProbeError;

const BUCKET_REGION: &str = "us-east-1";

/// Build an S3 client from explicit credentials. The region is fixed;
/// the bucket lives in us-east-1.
pub fn client(access_key_id: &str, secret_access_key: &str) -> Client {
    let credentials = Credentials::new(access_key_id, secret_access_key, None, None, "droom-setup");
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(BUCKET_REGION))
        .credentials_provider(credentials)
        .build();
    Client::from_conf(config)
}

/// HEAD the bucket. A 404 and a 403 mean different things and get
/// different errors: the bucket missing entirely versus existing behind
/// a policy that rejects these credentials.
pub async fn bucket_exists(client: &Client, bucket: &str) -> Result<(), ProbeError> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(()),
        Err(SdkError::ServiceError(ctx)) => {
            Err(classify_status(ctx.raw().status().as_u16(), bucket))
        }
        Err(err) => Err(ProbeError::Network(DisplayErrorContext(&err).to_string())),
    }
}

/// Count up to one object under a prefix, proving list permission
/// without paging the whole bucket.
pub async fn prefix_object_count(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<i32, ProbeError> {
    let response = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .max_keys(1)
        .send()
        .await
        .map_err(|err| match &err {
            SdkError::ServiceError(ctx) => classify_status(ctx.raw().status().as_u16(), bucket),
            _ => ProbeError::Network(DisplayErrorContext(&err).to_string()),
        })?;
    Ok(response.key_count().unwrap_or(0))
}

fn classify_status(status: u16, bucket: &str) -> ProbeError {
    match status {
        404 => ProbeError::NotFound(format!("bucket '{bucket}' does not exist (404)")),
        401 | 403 => ProbeError::Forbidden(format!(
            "bucket '{bucket}' exists but access denied ({status})"
        )),
        other => ProbeError::Api(format!("unexpected status {other} for bucket '{bucket}'")),
    }
}
