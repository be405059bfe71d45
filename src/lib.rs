//! # EDD
//!
//! 預計送達日與免運門檻計算引擎統一入口

pub use edd_calc::{
    DeliveryDateCalculator, DeliveryEstimator, EstimateSummary, FreeShippingCalculator,
    FreeShippingProgress, LabelFormatter,
};
pub use edd_core::{
    BusinessCalendar, CartSnapshot, EddError, FreeShippingOffer, RequiresCondition,
    ShippingMethodConfig, ShippingPackage,
};
