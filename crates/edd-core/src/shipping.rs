//! 免運優惠與配送包裹模型

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::EddError;

/// 免運條件
///
/// 對應宿主平台免運方式儲存的 `requires` 設定值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiresCondition {
    /// 無條件免運
    None,
    /// 需要優惠券
    Coupon,
    /// 需要最低消費金額
    MinAmount,
    /// 最低消費金額或優惠券（擇一）
    Either,
    /// 最低消費金額且優惠券（兩者皆須）
    Both,
}

impl RequiresCondition {
    /// 檢查此條件是否以最低消費金額作為門檻
    pub fn involves_min_amount(&self) -> bool {
        matches!(self, Self::MinAmount | Self::Either | Self::Both)
    }
}

impl FromStr for RequiresCondition {
    type Err = EddError;

    /// 解析原始設定值；空字串表示無條件免運
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim() {
            "" => Ok(Self::None),
            "coupon" => Ok(Self::Coupon),
            "min_amount" => Ok(Self::MinAmount),
            "either" => Ok(Self::Either),
            "both" => Ok(Self::Both),
            other => Err(EddError::InvalidSetting(format!(
                "未知的免運條件: {}",
                other
            ))),
        }
    }
}

/// 免運優惠
///
/// 一個配送包裹匹配的運送區域最多帶一筆免運方式設定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeShippingOffer {
    /// 免運條件
    pub requires: RequiresCondition,

    /// 最低消費金額
    pub min_amount: Decimal,
}

impl FreeShippingOffer {
    /// 創建新的免運優惠
    pub fn new(requires: RequiresCondition, min_amount: Decimal) -> Self {
        Self {
            requires,
            min_amount,
        }
    }

    /// 從原始方式設定解析 `requires` / `min_amount` 選項
    ///
    /// `min_amount` 缺失或非數值時視為 0；未知的 `requires` 值回傳錯誤。
    pub fn from_settings(settings: &Map<String, Value>) -> crate::Result<Self> {
        let requires = match settings.get("requires") {
            Some(Value::String(s)) => s.parse()?,
            _ => RequiresCondition::None,
        };

        let min_amount = settings
            .get("min_amount")
            .and_then(parse_amount)
            .unwrap_or(Decimal::ZERO);

        Ok(Self {
            requires,
            min_amount,
        })
    }

    /// 取得有效的消費門檻
    ///
    /// 只有金額大於 0 且條件確實以消費金額把關時才回傳 `Some`；
    /// 無條件或純優惠券的免運不構成門檻。
    pub fn qualifying_threshold(&self) -> Option<Decimal> {
        if self.min_amount > Decimal::ZERO && self.requires.involves_min_amount() {
            Some(self.min_amount)
        } else {
            None
        }
    }
}

/// 解析金額設定值
fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

/// 配送包裹
///
/// 購物車中依運送區域拆分出的子集，可能匹配到一筆免運優惠。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingPackage {
    /// 包裹ID
    pub id: Uuid,

    /// 匹配的運送區域
    pub zone_id: Option<String>,

    /// 該區域的免運優惠
    pub free_shipping: Option<FreeShippingOffer>,
}

impl ShippingPackage {
    /// 創建新的配送包裹（未匹配任何免運優惠）
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            zone_id: None,
            free_shipping: None,
        }
    }

    /// 建構器模式：設置運送區域
    pub fn with_zone_id(mut self, zone_id: String) -> Self {
        self.zone_id = Some(zone_id);
        self
    }

    /// 建構器模式：設置免運優惠
    pub fn with_free_shipping(mut self, offer: FreeShippingOffer) -> Self {
        self.free_shipping = Some(offer);
        self
    }
}

impl Default for ShippingPackage {
    fn default() -> Self {
        Self::new()
    }
}
