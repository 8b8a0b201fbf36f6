//! Aliyun OSS Picture Store
//!
//! Talks to an OSS bucket over its REST API with header signatures
//! (`Authorization: OSS <AccessKeyId>:<Signature>`).

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use sha1::Sha1;
use tracing::debug;

use crate::config::AliyunOssConfig;
use crate::domain::ports::{PictureStore, StoreError, StoreResult};
use crate::domain::value_objects::{remote_key, RemoteObject, StoreBackend};

type HmacSha1 = Hmac<Sha1>;

/// Longest response body quoted in an error message
const ERROR_BODY_LIMIT: usize = 512;

/// Picture store backed by an Aliyun OSS bucket
pub struct AliyunOssStore {
    config: AliyunOssConfig,
    client: Client,
}

impl AliyunOssStore {
    pub fn new(config: AliyunOssConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &AliyunOssConfig {
        &self.config
    }

    /// Address of `key` in the configured bucket
    pub fn object(&self, key: &str) -> RemoteObject {
        RemoteObject::new(
            &self.config.scheme,
            &self.config.bucket_name,
            &self.config.endpoint,
            key,
        )
    }

    /// Signed `PUT` of `body` to `object`
    fn put_request(
        &self,
        object: &RemoteObject,
        content_type: &str,
        body: Vec<u8>,
        date: &DateTime<Utc>,
    ) -> StoreResult<RequestBuilder> {
        let date = http_date(date);
        let auth = self.authorization("PUT", content_type, &date, object)?;
        Ok(self
            .client
            .put(object.url())
            .header(DATE, date)
            .header(CONTENT_TYPE, content_type)
            .header(AUTHORIZATION, auth)
            .body(body))
    }

    /// Signed `GET` of `object`
    fn get_request(&self, object: &RemoteObject, date: &DateTime<Utc>) -> StoreResult<RequestBuilder> {
        let date = http_date(date);
        let auth = self.authorization("GET", "", &date, object)?;
        Ok(self
            .client
            .get(object.url())
            .header(DATE, date)
            .header(AUTHORIZATION, auth))
    }

    fn authorization(
        &self,
        verb: &str,
        content_type: &str,
        date: &str,
        object: &RemoteObject,
    ) -> StoreResult<String> {
        let to_sign = string_to_sign(verb, "", content_type, date, &object.canonical_resource());
        let signature = sign(&self.config.access_key_secret, &to_sign)?;
        Ok(format!("OSS {}:{}", self.config.access_key_id, signature))
    }
}

impl PictureStore for AliyunOssStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::AliyunOss
    }

    fn upload(&self, local_path: &Path) -> StoreResult<String> {
        let key = remote_key(&self.config.prefix, local_path).ok_or_else(|| StoreError::Upload {
            key: local_path.display().to_string(),
            message: "local path has no UTF-8 file name".to_string(),
        })?;
        let upload_err = |message: String| StoreError::Upload {
            key: key.clone(),
            message,
        };

        let body = std::fs::read(local_path).map_err(|e| StoreError::io(local_path, e))?;
        let object = self.object(&key);
        let size = body.len();

        let response = self
            .put_request(&object, content_type_for(local_path), body, &Utc::now())?
            .send()
            .map_err(|e| upload_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(upload_err(format!("HTTP {}: {}", status, truncate(&text))));
        }

        debug!(key = %key, bytes = size, "uploaded object");
        Ok(object.url())
    }

    fn download(&self, remote_key: &str, local_path: &Path) -> StoreResult<()> {
        let download_err = |message: String| StoreError::Download {
            key: remote_key.to_string(),
            message,
        };

        let object = self.object(remote_key);
        let response = self
            .get_request(&object, &Utc::now())?
            .send()
            .map_err(|e| download_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(download_err(format!("HTTP {}: {}", status, truncate(&text))));
        }

        let body = response.bytes().map_err(|e| download_err(e.to_string()))?;
        std::fs::write(local_path, &body).map_err(|e| StoreError::io(local_path, e))?;
        debug!(key = remote_key, bytes = body.len(), "downloaded object");
        Ok(())
    }

    fn public_url(&self, remote_key: &str) -> String {
        self.object(remote_key).url()
    }
}

/// OSS string to sign:
/// `VERB\nContent-MD5\nContent-Type\nDate\nCanonicalizedResource`
pub fn string_to_sign(
    verb: &str,
    content_md5: &str,
    content_type: &str,
    date: &str,
    canonical_resource: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}",
        verb, content_md5, content_type, date, canonical_resource
    )
}

/// Base64 HMAC-SHA1 of `string_to_sign` keyed by the access key secret
pub fn sign(secret: &str, string_to_sign: &str) -> StoreResult<String> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| StoreError::Signature(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// RFC 7231 date, e.g. `Sun, 22 Nov 2015 08:16:38 GMT`
pub fn http_date(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Content type sent with an upload, from the file extension
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
