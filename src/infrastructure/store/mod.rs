//! Picture Bed Stores
//!
//! Concrete [`PictureStore`] backends and the factory that picks one
//! from configuration.

mod aliyun_oss;

pub use aliyun_oss::{http_date, sign, string_to_sign, AliyunOssStore};

use reqwest::blocking::Client;

use crate::config::StoreConfig;
use crate::domain::ports::PictureStore;
use crate::domain::value_objects::StoreBackend;
use crate::error::PicbedResult;

/// Build the store selected by `config.backend`
pub fn build_store(config: &StoreConfig, client: Client) -> PicbedResult<Box<dyn PictureStore>> {
    match config.backend {
        StoreBackend::AliyunOss => Ok(Box::new(AliyunOssStore::new(
            config.aliyun_oss.clone(),
            client,
        ))),
    }
}
