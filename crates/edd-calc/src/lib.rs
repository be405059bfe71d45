//! # EDD Calculation Engine
//!
//! 預計送達日與免運門檻計算引擎

pub mod delivery;
pub mod estimator;
pub mod free_shipping;
pub mod label;

// Re-export 主要類型
pub use delivery::DeliveryDateCalculator;
pub use estimator::DeliveryEstimator;
pub use free_shipping::{FreeShippingCalculator, FreeShippingProgress};
pub use label::LabelFormatter;

use chrono::NaiveDate;

/// 購物車估算結果
///
/// 單次呼叫同時產出的兩項顯示內容；兩者皆可能不適用。
#[derive(Debug, Clone)]
pub struct EstimateSummary {
    /// 預計送達日（運送方式未設定天數時為 `None`）
    pub expected_date: Option<NaiveDate>,

    /// 免運門檻進度（無符合的門檻或已達標時為 `None`）
    pub free_shipping: Option<FreeShippingProgress>,
}

impl EstimateSummary {
    /// 創建空的估算結果
    pub fn empty() -> Self {
        Self {
            expected_date: None,
            free_shipping: None,
        }
    }

    /// 檢查是否沒有任何可顯示的內容
    pub fn is_empty(&self) -> bool {
        self.expected_date.is_none() && self.free_shipping.is_none()
    }
}
