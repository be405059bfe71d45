//! 購物車快照模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shipping::ShippingPackage;

/// 購物車快照
///
/// 每次呼叫時由宿主平台提供的不可變快照，核心不保留跨呼叫的引用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// 顯示小計
    pub subtotal: Decimal,

    /// 配送包裹（依運送區域拆分，順序不影響計算結果）
    pub packages: Vec<ShippingPackage>,
}

impl CartSnapshot {
    /// 創建新的購物車快照
    pub fn new(subtotal: Decimal) -> Self {
        Self {
            subtotal,
            packages: Vec::new(),
        }
    }

    /// 建構器模式：加入配送包裹
    pub fn with_package(mut self, package: ShippingPackage) -> Self {
        self.packages.push(package);
        self
    }

    /// 建構器模式：設置全部配送包裹
    pub fn with_packages(mut self, packages: Vec<ShippingPackage>) -> Self {
        self.packages = packages;
        self
    }

    /// 檢查購物車是否沒有任何配送包裹
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
