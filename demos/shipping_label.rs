//! 運送方式標籤示例

use std::collections::HashMap;

use chrono::Utc;
use edd::{DeliveryEstimator, ShippingMethodConfig};
use serde_json::{json, Map};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 運送方式標籤示例 ===\n");

    // 模擬宿主平台儲存的原始實例設定
    let mut raw_settings = Map::new();
    raw_settings.insert("title".to_string(), json!("Express"));
    raw_settings.insert("expected_delivery_days".to_string(), json!("2"));

    let config = ShippingMethodConfig::from_instance_settings(3, &raw_settings);
    println!(
        "實例 {} 設定的工作天數: {:?}",
        config.instance_id, config.expected_delivery_days
    );

    let mut configs = HashMap::new();
    configs.insert(config.instance_id, config);
    let estimator = DeliveryEstimator::new(configs);

    let labelled = estimator.labelled_for_instance(3, "Express: $12.00", &Utc::now());
    println!("\n{}", labelled);

    Ok(())
}
