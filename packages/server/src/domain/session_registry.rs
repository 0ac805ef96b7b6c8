//! Connection-count tracker.

/// Number of currently-open connections.
///
/// A plain counter with no floor: double-counted disconnects drive it negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionRegistry {
    count: i64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new count
    pub fn on_connect(&mut self) -> i64 {
        self.count += 1;
        self.count
    }

    /// Decrement and return the new count
    pub fn on_disconnect(&mut self) -> i64 {
        self.count -= 1;
        self.count
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_connect_increments() {
        // テスト項目: 接続ごとにカウントが増え、新しい値が返される
        // given (前提条件):
        let mut registry = SessionRegistry::new();

        // when (操作):
        let first = registry.on_connect();
        let second = registry.on_connect();

        // then (期待する結果):
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_on_disconnect_decrements() {
        // テスト項目: 切断ごとにカウントが減り、新しい値が返される
        // given (前提条件):
        let mut registry = SessionRegistry::new();
        registry.on_connect();
        registry.on_connect();

        // when (操作):
        let result = registry.on_disconnect();

        // then (期待する結果):
        assert_eq!(result, 1);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_on_disconnect_can_go_negative() {
        // テスト項目: 下限は設けられておらず、切断が重複すると負になる
        // given (前提条件):
        let mut registry = SessionRegistry::new();

        // when (操作):
        let result = registry.on_disconnect();

        // then (期待する結果):
        assert_eq!(result, -1);
    }

    #[test]
    fn test_count_matches_connects_minus_disconnects() {
        // テスト項目: 任意の接続・切断列の後、カウントは (接続数 - 切断数) に等しい
        // given (前提条件):
        let events = [true, true, false, true, false, false, false, true, true];
        let mut registry = SessionRegistry::new();

        // when (操作):
        for connect in events {
            if connect {
                registry.on_connect();
            } else {
                registry.on_disconnect();
            }
        }

        // then (期待する結果):
        let connects = events.iter().filter(|e| **e).count() as i64;
        let disconnects = events.len() as i64 - connects;
        assert_eq!(registry.count(), connects - disconnects);
    }
}
