//! 免運門檻計算

use edd_core::ShippingPackage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 免運門檻進度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeShippingProgress {
    /// 所有包裹中最低的消費門檻
    pub minimum_amount: Decimal,

    /// 計算當下的購物車小計
    pub subtotal: Decimal,

    /// 距離門檻還差的金額（恆為正）
    pub remaining: Decimal,
}

/// 免運門檻計算器
pub struct FreeShippingCalculator;

impl FreeShippingCalculator {
    /// 取得所有包裹中最低的有效消費門檻
    ///
    /// 顧客可能同時被多個運送區域評估，回報最容易達成的門檻。
    /// 沒有任何以消費金額把關的免運優惠時回傳 `None`。
    pub fn minimum_threshold(packages: &[ShippingPackage]) -> Option<Decimal> {
        packages
            .iter()
            .filter_map(|package| package.free_shipping.as_ref())
            .filter_map(|offer| offer.qualifying_threshold())
            .min()
    }

    /// 計算免運門檻進度
    ///
    /// 門檻已達成（差額 ≤ 0）時回傳 `None`，表示無需再提示。
    pub fn progress(
        subtotal: Decimal,
        packages: &[ShippingPackage],
    ) -> Option<FreeShippingProgress> {
        let minimum_amount = Self::minimum_threshold(packages)?;
        let remaining = minimum_amount - subtotal;

        if remaining <= Decimal::ZERO {
            return None;
        }

        Some(FreeShippingProgress {
            minimum_amount,
            subtotal,
            remaining,
        })
    }

    /// 計算距離免運還差的金額
    pub fn remaining(subtotal: Decimal, packages: &[ShippingPackage]) -> Option<Decimal> {
        Self::progress(subtotal, packages).map(|progress| progress.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edd_core::{FreeShippingOffer, RequiresCondition};

    fn package_with_offer(requires: RequiresCondition, min_amount: i64) -> ShippingPackage {
        ShippingPackage::new()
            .with_free_shipping(FreeShippingOffer::new(requires, Decimal::from(min_amount)))
    }

    #[test]
    fn test_remaining_below_threshold() {
        // 小計 40，門檻 50 → 還差 10
        let packages = vec![package_with_offer(RequiresCondition::MinAmount, 50)];

        let remaining = FreeShippingCalculator::remaining(Decimal::from(40), &packages);
        assert_eq!(remaining, Some(Decimal::from(10)));
    }

    #[test]
    fn test_threshold_already_met() {
        // 小計 60 已超過門檻 50 → 無需提示
        let packages = vec![package_with_offer(RequiresCondition::MinAmount, 50)];

        let remaining = FreeShippingCalculator::remaining(Decimal::from(60), &packages);
        assert_eq!(remaining, None);
    }

    #[test]
    fn test_threshold_exactly_met() {
        let packages = vec![package_with_offer(RequiresCondition::MinAmount, 50)];

        let remaining = FreeShippingCalculator::remaining(Decimal::from(50), &packages);
        assert_eq!(remaining, None);
    }

    #[test]
    fn test_picks_smallest_threshold_across_packages() {
        // 兩個區域門檻 80 與 30，小計 10 → 以較低的 30 計算，還差 20
        let packages = vec![
            package_with_offer(RequiresCondition::MinAmount, 80),
            package_with_offer(RequiresCondition::MinAmount, 30),
        ];

        let progress = FreeShippingCalculator::progress(Decimal::from(10), &packages).unwrap();
        assert_eq!(progress.minimum_amount, Decimal::from(30));
        assert_eq!(progress.remaining, Decimal::from(20));
    }

    #[test]
    fn test_coupon_only_offer_is_excluded() {
        // 純優惠券免運不構成消費門檻
        let packages = vec![package_with_offer(RequiresCondition::Coupon, 50)];

        assert_eq!(FreeShippingCalculator::minimum_threshold(&packages), None);
        assert_eq!(
            FreeShippingCalculator::remaining(Decimal::from(10), &packages),
            None
        );
    }

    #[test]
    fn test_either_and_both_conditions_qualify() {
        let packages = vec![
            package_with_offer(RequiresCondition::Either, 70),
            package_with_offer(RequiresCondition::Both, 90),
        ];

        assert_eq!(
            FreeShippingCalculator::minimum_threshold(&packages),
            Some(Decimal::from(70))
        );
    }

    #[test]
    fn test_no_packages_means_none() {
        assert_eq!(FreeShippingCalculator::remaining(Decimal::from(10), &[]), None);
    }

    #[test]
    fn test_packages_without_offers_mean_none() {
        let packages = vec![ShippingPackage::new(), ShippingPackage::new()];

        assert_eq!(
            FreeShippingCalculator::remaining(Decimal::from(10), &packages),
            None
        );
    }

    #[test]
    fn test_decimal_amounts() {
        // 小計 42.50，門檻 50 → 還差 7.50
        let packages = vec![package_with_offer(RequiresCondition::MinAmount, 50)];

        let remaining =
            FreeShippingCalculator::remaining(Decimal::new(4250, 2), &packages).unwrap();
        assert_eq!(remaining, Decimal::new(750, 2));
    }

    #[test]
    fn test_progress_keeps_subtotal() {
        let packages = vec![package_with_offer(RequiresCondition::MinAmount, 50)];

        let progress = FreeShippingCalculator::progress(Decimal::from(40), &packages).unwrap();
        assert_eq!(progress.subtotal, Decimal::from(40));
        assert_eq!(progress.minimum_amount, Decimal::from(50));
        assert_eq!(progress.remaining, Decimal::from(10));
    }
}
