//! # EDD Core
//!
//! 預計送達日核心資料模型與類型定義

pub mod calendar;
pub mod cart;
pub mod config;
pub mod shipping;

// Re-export 主要類型
pub use calendar::BusinessCalendar;
pub use cart::CartSnapshot;
pub use config::ShippingMethodConfig;
pub use shipping::{FreeShippingOffer, RequiresCondition, ShippingPackage};

/// EDD 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EddError {
    #[error("無效的運送方式設定: {0}")]
    InvalidSetting(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EddError>;
