//! 購物車估算示例

use std::collections::HashMap;

use chrono::Utc;
use edd::{
    CartSnapshot, DeliveryEstimator, FreeShippingOffer, RequiresCondition, ShippingMethodConfig,
    ShippingPackage,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 購物車估算示例 ===\n");

    // 運送方式設定：實例 7 承諾 3 個工作天
    let mut configs = HashMap::new();
    configs.insert(7, ShippingMethodConfig::new(7, Some(3)));
    let estimator = DeliveryEstimator::new(configs);

    // 購物車快照：兩個區域，門檻 100 與 60
    let cart = CartSnapshot::new(Decimal::from(45))
        .with_package(
            ShippingPackage::new()
                .with_zone_id("ZONE-NORTH".to_string())
                .with_free_shipping(FreeShippingOffer::new(
                    RequiresCondition::MinAmount,
                    Decimal::from(100),
                )),
        )
        .with_package(
            ShippingPackage::new()
                .with_zone_id("ZONE-SOUTH".to_string())
                .with_free_shipping(FreeShippingOffer::new(
                    RequiresCondition::Either,
                    Decimal::from(60),
                )),
        );

    println!("購物車小計: {}", cart.subtotal);
    for package in &cart.packages {
        println!(
            "  - 包裹 {}, 區域: {}",
            package.id,
            package.zone_id.as_deref().unwrap_or("(未匹配)")
        );
    }

    let summary = estimator.summarize(7, &cart, &Utc::now());

    println!();
    match summary.expected_date {
        Some(date) => println!("預計送達日: {}", date),
        None => println!("預計送達日: 未設定"),
    }

    match summary.free_shipping {
        Some(progress) => println!(
            "免運提示: 門檻 {}，還差 {}",
            progress.minimum_amount, progress.remaining
        ),
        None => println!("免運提示: 無需顯示"),
    }

    Ok(())
}
