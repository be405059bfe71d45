//! 預計送達日計算

use chrono::{DateTime, NaiveDate, TimeZone};
use edd_core::BusinessCalendar;

/// 預計送達日計算器
pub struct DeliveryDateCalculator;

impl DeliveryDateCalculator {
    /// 計算預計送達日
    ///
    /// 從 `now` 在其時區下的日曆日期出發，先跳到下一個工作日，
    /// 再向前推算 `business_days` 個工作日。起始日本身永不計入：
    /// `business_days = 0` 表示下一個工作日送達，結果一定嚴格晚於
    /// 起始日期，且必落在工作日上。
    ///
    /// `now` 由呼叫端提供，函數本身不讀取系統時鐘。
    pub fn expected_delivery_date<Tz: TimeZone>(
        now: &DateTime<Tz>,
        business_days: u32,
    ) -> NaiveDate {
        let start = now.date_naive();
        let first = BusinessCalendar::next_business_day(start);

        BusinessCalendar::add_business_days(first, business_days)
    }
}
