//! Time-related utilities.

use chrono::{DateTime, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to UTC RFC 3339 format
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn millis_to_rfc3339(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_rfc3339() {
        // テスト項目: ミリ秒のタイムスタンプが RFC 3339 形式に変換される
        // given (前提条件):
        let timestamp = 1_672_531_200_000; // 2023-01-01T00:00:00Z

        // when (操作):
        let result = millis_to_rfc3339(timestamp);

        // then (期待する結果):
        assert_eq!(result, "2023-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_millis_to_rfc3339_keeps_milliseconds() {
        // テスト項目: ミリ秒部分が保持される
        // given (前提条件):
        let timestamp = 1_672_531_200_123;

        // when (操作):
        let result = millis_to_rfc3339(timestamp);

        // then (期待する結果):
        assert!(result.starts_with("2023-01-01T00:00:00.123"));
    }

    #[test]
    fn test_now_millis_is_after_2020() {
        // テスト項目: 現在時刻が妥当な範囲のミリ秒で返される
        // given (前提条件):
        let year_2020 = 1_577_836_800_000;

        // when (操作):
        let now = now_millis();

        // then (期待する結果):
        assert!(now > year_2020);
    }
}
