//! Store Backend Value Object
//!
//! Names the remote picture bed a migration uploads to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PicbedError;

/// Picture bed backend
///
/// Each variant has exactly one `PictureStore` implementation. Names are
/// parsed strictly: an unknown name is a configuration error, never a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum StoreBackend {
    /// Aliyun Object Storage Service
    #[default]
    AliyunOss,
}

impl StoreBackend {
    /// Canonical configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::AliyunOss => "aliyun-oss",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = PicbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aliyun-oss" | "aliyun_oss" | "aliyunoss" | "oss" => Ok(StoreBackend::AliyunOss),
            _ => Err(PicbedError::UnsupportedBackend {
                backend: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StoreBackend {
    type Error = PicbedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StoreBackend> for String {
    fn from(backend: StoreBackend) -> Self {
        backend.as_str().to_string()
    }
}
