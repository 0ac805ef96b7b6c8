//! MessagePusher trait 定義
//!
//! 接続中のクライアントへのメッセージ配信のインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::ConnectionId;

/// 各接続への送信チャンネル（シリアライズ済みの JSON フレームを送る）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ配信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 登録中の接続のいずれにも送信できなかった
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}

/// 接続レジストリ兼メッセージ配信の抽象化
///
/// Broadcast Relay と Typing Notifier はこの trait を介して配信します。
/// 配信範囲（ページング、ルーム単位など）を将来変える場合もこの trait の実装だけを差し替えます。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続を登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 登録中の全ての接続に送信し、送信できた接続数を返す
    ///
    /// 個々の接続への送信失敗は許容します（スキップしてログに残す）。
    /// 登録中の接続が 1 つ以上あり、全てに失敗した場合は `PushFailed` を返します。
    async fn broadcast(&self, content: &str) -> Result<usize, MessagePushError>;
}
