//! Domain entities.

/// Author name used for synthetic presence entries
pub const SYSTEM_USER: &str = "System";

/// One logged unit of chat content.
///
/// Immutable once appended to the [`MessageLog`](super::MessageLog). Neither field is
/// validated: empty, arbitrarily long and markup-bearing text are all kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub user: String,
    pub message: String,
}

impl ChatEntry {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
        }
    }

    /// Synthetic "N users are connected" entry authored by [`SYSTEM_USER`]
    pub fn presence(session_count: i64) -> Self {
        Self::new(SYSTEM_USER, format!("{} users are connected", session_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_entry() {
        // テスト項目: 接続数通知のエントリが System 名義で生成される
        // given (前提条件):
        let session_count = 2;

        // when (操作):
        let entry = ChatEntry::presence(session_count);

        // then (期待する結果):
        assert_eq!(entry.user, "System");
        assert_eq!(entry.message, "2 users are connected");
    }

    #[test]
    fn test_presence_entry_with_negative_count() {
        // テスト項目: 接続数が負でもそのまま文面に反映される
        // given (前提条件):
        let session_count = -1;

        // when (操作):
        let entry = ChatEntry::presence(session_count);

        // then (期待する結果):
        assert_eq!(entry.message, "-1 users are connected");
    }
}
