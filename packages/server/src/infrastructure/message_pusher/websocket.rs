//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理（接続レジストリ）
//! - 全接続へのブロードキャスト
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_client(connection_id, tx).await;
///
/// // 全接続に送信
/// pusher.broadcast("{\"event\":\"user-typing\",\"data\":{\"user\":\"alice\"}}").await?;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn broadcast(&self, content: &str) -> Result<usize, MessagePushError> {
        let clients = self.clients.lock().await;
        let mut delivered = 0;

        for (connection_id, sender) in clients.iter() {
            // ブロードキャストでは一部の送信失敗を許容
            if let Err(e) = sender.send(content.to_string()) {
                tracing::warn!(
                    "Failed to push message to connection '{}': {}",
                    connection_id,
                    e
                );
            } else {
                delivered += 1;
            }
        }

        tracing::debug!(
            "Broadcasted message to {}/{} connection(s)",
            delivered,
            clients.len()
        );

        if delivered == 0 && !clients.is_empty() {
            return Err(MessagePushError::PushFailed(format!(
                "all {} connection(s) are closed",
                clients.len()
            )));
        }

        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - WebSocketMessagePusher の接続登録・解除
    // - broadcast: 登録中の全接続への送信
    // - 切断済みチャンネルがあっても他の接続には届くこと
    //
    // 【どのようなシナリオをテストするか】
    // 1. 複数接続へのブロードキャスト
    // 2. 登録解除した接続には届かない
    // 3. 受信側が閉じた接続はスキップされる
    // 4. 接続がない場合のブロードキャスト
    // 5. 全ての接続が閉じている場合は PushFailed
    // ========================================

    #[tokio::test]
    async fn test_broadcast_reaches_all_connections() {
        // テスト項目: 登録中の全ての接続にメッセージが届く
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        pusher.register_client(ConnectionId::generate(), tx1).await;
        pusher.register_client(ConnectionId::generate(), tx2).await;

        // when (操作):
        let result = pusher.broadcast("Broadcast message").await;

        // then (期待する結果):
        assert_eq!(result, Ok(2));
        assert_eq!(rx1.recv().await, Some("Broadcast message".to_string()));
        assert_eq!(rx2.recv().await, Some("Broadcast message".to_string()));
    }

    #[tokio::test]
    async fn test_unregistered_connection_receives_nothing() {
        // テスト項目: 登録解除された接続には送信されない
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        let (tx_alice, mut rx_alice) = mpsc::unbounded_channel();
        let (tx_bob, mut rx_bob) = mpsc::unbounded_channel();
        pusher.register_client(alice, tx_alice).await;
        pusher.register_client(bob, tx_bob).await;

        // when (操作):
        pusher.unregister_client(&bob).await;
        let result = pusher.broadcast("after bob left").await;

        // then (期待する結果):
        assert_eq!(result, Ok(1));
        assert_eq!(rx_alice.recv().await, Some("after bob left".to_string()));
        assert!(rx_bob.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_skips_closed_channel() {
        // テスト項目: 受信側が閉じた接続はスキップされ、他の接続には届く
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx_open, mut rx_open) = mpsc::unbounded_channel();
        let (tx_closed, rx_closed) = mpsc::unbounded_channel::<String>();
        drop(rx_closed);
        pusher.register_client(ConnectionId::generate(), tx_open).await;
        pusher.register_client(ConnectionId::generate(), tx_closed).await;

        // when (操作):
        let result = pusher.broadcast("still delivered").await;

        // then (期待する結果):
        assert_eq!(result, Ok(1));
        assert_eq!(rx_open.recv().await, Some("still delivered".to_string()));
    }

    #[tokio::test]
    async fn test_broadcast_without_connections() {
        // テスト項目: 接続がなくてもエラーにならない
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();

        // when (操作):
        let result = pusher.broadcast("Message").await;

        // then (期待する結果):
        assert_eq!(result, Ok(0));
    }

    #[tokio::test]
    async fn test_broadcast_fails_when_every_channel_closed() {
        // テスト項目: 登録中の全ての接続が閉じている場合は PushFailed になる
        // given (前提条件):
        let pusher = WebSocketMessagePusher::new();
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        drop(rx);
        pusher.register_client(ConnectionId::generate(), tx).await;

        // when (操作):
        let result = pusher.broadcast("nobody listens").await;

        // then (期待する結果):
        assert!(matches!(result, Err(MessagePushError::PushFailed(_))));
    }
}
