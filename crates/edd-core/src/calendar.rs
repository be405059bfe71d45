//! 工作日曆
//!
//! 工作日固定為週一到週五（ISO 編號 1-5），週六週日為非工作日。
//! 不處理國定假日。

use chrono::{Datelike, NaiveDate};

/// 工作日曆計算
pub struct BusinessCalendar;

impl BusinessCalendar {
    /// 檢查是否為工作日（週一到週五）
    pub fn is_business_day(date: NaiveDate) -> bool {
        date.weekday().number_from_monday() < 6
    }

    /// 檢查是否為週末
    pub fn is_weekend(date: NaiveDate) -> bool {
        !Self::is_business_day(date)
    }

    /// 計算工作日（向前推算）
    ///
    /// 逐日前進，只有落在工作日的日子才計入；`days = 0` 時回傳起始日本身。
    pub fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
        let mut current = start;
        let mut remaining = days;

        while remaining > 0 {
            current = current.succ_opt().expect("日期溢出");
            if Self::is_business_day(current) {
                remaining -= 1;
            }
        }

        current
    }

    /// 獲取下一個工作日（嚴格在 `date` 之後）
    pub fn next_business_day(date: NaiveDate) -> NaiveDate {
        Self::add_business_days(date, 1)
    }

    /// 計算兩個日期之間的工作日數量（區間 `(start, end]`）
    pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
        let mut count = 0;
        let mut current = start;

        while current < end {
            current = current.succ_opt().expect("日期溢出");
            if Self::is_business_day(current) {
                count += 1;
            }
        }

        count
    }
}
