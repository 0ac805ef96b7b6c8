//! Broadcast Relay: pushes the entire message log to every connection.

use std::sync::Arc;

use hiroba_shared::protocol::ServerEvent;

use crate::{
    domain::{MessageLog, MessagePusher},
    infrastructure::dto::conversion::to_log_payload,
};

use super::error::BroadcastError;

/// 全ログを全接続に配信する
///
/// 送信者を含む全ての接続に、追加順のままのログ全体を送ります（クライアントごとの絞り込みなし）。
#[derive(Clone)]
pub struct BroadcastRelay {
    message_pusher: Arc<dyn MessagePusher>,
}

impl BroadcastRelay {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// `new-message` を全接続に送信し、送信できた接続数を返す
    pub async fn broadcast_all(&self, log: &MessageLog) -> Result<usize, BroadcastError> {
        let event = ServerEvent::NewMessage(to_log_payload(log.snapshot()));
        let json = serde_json::to_string(&event)?;

        let delivered = self.message_pusher.broadcast(&json).await?;
        tracing::info!(
            "Broadcasted message log ({} entries) to {} connection(s)",
            log.len(),
            delivered
        );

        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatEntry, MessagePushError, MockMessagePusher};

    #[tokio::test]
    async fn test_broadcast_all_sends_full_log_in_append_order() {
        // テスト項目: ログ全体が追加順のまま new-message として配信される
        // given (前提条件):
        let mut log = MessageLog::new();
        log.append(ChatEntry::presence(1));
        log.append(ChatEntry::new("A", "hi"));

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|content| {
                content
                    == r#"{"event":"new-message","data":{"messages":[{"user":"System","message":"1 users are connected"},{"user":"A","message":"hi"}]}}"#
            })
            .times(1)
            .returning(|_| Ok(2));
        let relay = BroadcastRelay::new(Arc::new(pusher));

        // when (操作):
        let result = relay.broadcast_all(&log).await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_broadcast_all_propagates_push_error() {
        // テスト項目: 配信の失敗はエラーとして返される
        // given (前提条件):
        let log = MessageLog::new();
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .times(1)
            .returning(|_| Err(MessagePushError::PushFailed("down".to_string())));
        let relay = BroadcastRelay::new(Arc::new(pusher));

        // when (操作):
        let result = relay.broadcast_all(&log).await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(BroadcastError::Push(MessagePushError::PushFailed(_)))
        ));
    }
}
