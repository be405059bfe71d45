//! 運送方式標籤格式化

use chrono::NaiveDate;

/// 標籤格式化器
///
/// 產出純文字內容；HTML 標記與多語系處理由宿主平台負責。
pub struct LabelFormatter;

impl LabelFormatter {
    /// 格式化預計送達日（例如 "10 Nov 2025"）
    pub fn format_expected_date(date: NaiveDate) -> String {
        date.format("%-d %b %Y").to_string()
    }

    /// 在運送方式標籤後附加預計送達日
    pub fn append_expected_delivery(label: &str, date: NaiveDate) -> String {
        format!(
            "{}\nExpected delivery by {}",
            label,
            Self::format_expected_date(date)
        )
    }
}
