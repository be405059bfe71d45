//! 運送方式設定模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 運送方式實例設定中的工作天數欄位鍵
pub const EXPECTED_DELIVERY_DAYS_KEY: &str = "expected_delivery_days";

/// 運送方式設定快照
///
/// 每次標籤渲染時由宿主平台提供，核心只讀取不修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethodConfig {
    /// 運送方式實例ID
    pub instance_id: u64,

    /// 預計送達工作天數
    /// - `None`: 未設定，送達日計算不適用
    /// - `Some(0)`: 有效設定，表示下一個工作日送達
    pub expected_delivery_days: Option<u32>,
}

impl ShippingMethodConfig {
    /// 創建新的運送方式設定
    pub fn new(instance_id: u64, expected_delivery_days: Option<u32>) -> Self {
        Self {
            instance_id,
            expected_delivery_days,
        }
    }

    /// 從原始實例設定解析
    ///
    /// 設定值來自宿主平台的鬆散型別設定表：
    /// - 欄位缺失、null 或空字串 ⇒ 未設定（`None`）
    /// - 負數 ⇒ 鉗制為 0
    /// - 非數值 ⇒ 視為 0（顯示用途，不拒絕輸入）
    pub fn from_instance_settings(instance_id: u64, settings: &Map<String, Value>) -> Self {
        let expected_delivery_days = settings
            .get(EXPECTED_DELIVERY_DAYS_KEY)
            .and_then(parse_delivery_days);

        Self {
            instance_id,
            expected_delivery_days,
        }
    }

    /// 檢查是否已設定送達天數
    pub fn is_configured(&self) -> bool {
        self.expected_delivery_days.is_some()
    }
}

/// 解析工作天數設定值（缺失與空值回傳 `None`，其餘一律鉗制為非負整數）
fn parse_delivery_days(value: &Value) -> Option<u32> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(clamp_days(s.trim().parse::<i64>().unwrap_or(0))),
        Value::Number(n) => {
            let days = n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0);
            Some(clamp_days(days))
        }
        _ => Some(0),
    }
}

/// 鉗制為合法的非負工作天數
fn clamp_days(days: i64) -> u32 {
    days.clamp(0, u32::MAX as i64) as u32
}
