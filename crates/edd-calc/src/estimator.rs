//! 送達估算主入口

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone};
use edd_core::{CartSnapshot, ShippingMethodConfig};

use crate::{
    DeliveryDateCalculator, EstimateSummary, FreeShippingCalculator, LabelFormatter,
};

/// 送達估算器
///
/// 持有宿主平台提供的運送方式設定快照，依實例ID查找後計算。
pub struct DeliveryEstimator {
    /// 運送方式設定（以實例ID索引）
    configs: HashMap<u64, ShippingMethodConfig>,
}

impl DeliveryEstimator {
    /// 創建新的送達估算器
    pub fn new(configs: HashMap<u64, ShippingMethodConfig>) -> Self {
        Self { configs }
    }

    /// 取得指定實例的設定
    pub fn config(&self, instance_id: u64) -> Option<&ShippingMethodConfig> {
        self.configs.get(&instance_id)
    }

    /// 計算指定運送方式實例的預計送達日
    ///
    /// 實例不存在或未設定工作天數時回傳 `None`，標籤渲染退回原樣顯示。
    pub fn expected_date_for_instance<Tz: TimeZone>(
        &self,
        instance_id: u64,
        now: &DateTime<Tz>,
    ) -> Option<NaiveDate> {
        let config = self.configs.get(&instance_id)?;
        let business_days = config.expected_delivery_days?;

        tracing::debug!(
            "計算預計送達日: 實例 {}，工作天數 {}",
            instance_id,
            business_days
        );

        Some(DeliveryDateCalculator::expected_delivery_date(
            now,
            business_days,
        ))
    }

    /// 產出附加預計送達日的運送方式標籤
    ///
    /// 無法計算時回傳未修改的原標籤。
    pub fn labelled_for_instance<Tz: TimeZone>(
        &self,
        instance_id: u64,
        label: &str,
        now: &DateTime<Tz>,
    ) -> String {
        match self.expected_date_for_instance(instance_id, now) {
            Some(date) => LabelFormatter::append_expected_delivery(label, date),
            None => label.to_string(),
        }
    }

    /// 單次呼叫產出購物車的完整估算結果
    pub fn summarize<Tz: TimeZone>(
        &self,
        instance_id: u64,
        cart: &CartSnapshot,
        now: &DateTime<Tz>,
    ) -> EstimateSummary {
        tracing::info!(
            "開始估算：實例 {}，包裹 {} 件，小計 {}",
            instance_id,
            cart.packages.len(),
            cart.subtotal
        );

        let expected_date = self.expected_date_for_instance(instance_id, now);
        let free_shipping = FreeShippingCalculator::progress(cart.subtotal, &cart.packages);

        EstimateSummary {
            expected_date,
            free_shipping,
        }
    }
}
