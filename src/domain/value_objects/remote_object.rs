//! Remote Object Value Object
//!
//! Addressing convention for objects in a picture bed bucket.

use std::fmt;
use std::path::Path;

/// An object in a virtual-hosted bucket
///
/// The public URL is `scheme://bucket.endpoint/key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    scheme: String,
    bucket: String,
    endpoint: String,
    key: String,
}

impl RemoteObject {
    pub fn new(
        scheme: impl Into<String>,
        bucket: impl Into<String>,
        endpoint: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            bucket: bucket.into(),
            endpoint: endpoint.into(),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Host name, `bucket.endpoint`
    pub fn host(&self) -> String {
        format!("{}.{}", self.bucket, self.endpoint)
    }

    /// Fully-qualified public URL
    pub fn url(&self) -> String {
        format!("{}://{}/{}", self.scheme, self.host(), self.key)
    }

    /// Canonicalized resource used when signing requests, `/bucket/key`
    pub fn canonical_resource(&self) -> String {
        format!("/{}/{}", self.bucket, self.key)
    }
}

impl fmt::Display for RemoteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Remote key for a local file: `prefix` followed by the file's basename.
///
/// The prefix is concatenated as-is, so a folder-style prefix needs its own
/// trailing `/`.
pub fn remote_key(prefix: &str, local_path: &Path) -> Option<String> {
    let name = local_path.file_name()?.to_str()?;
    Some(format!("{}{}", prefix, name))
}
