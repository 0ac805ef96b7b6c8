//! UseCase: 入力中通知
//!
//! 入力中通知は一時的なシグナルであり、メッセージログには一切残しません。
//! そのためこのユースケースは `ChatState` を受け取りません。

use std::sync::Arc;

use hiroba_shared::protocol::{ServerEvent, TypingPayload};

use crate::domain::MessagePusher;

use super::error::BroadcastError;

/// 入力中通知のユースケース
pub struct NotifyTypingUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl NotifyTypingUseCase {
    /// 新しい NotifyTypingUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// `user-typing` を全接続（送信者を含む）に配信する
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 通知を受け取った接続数
    /// * `Err(BroadcastError)` - 配信失敗
    pub async fn execute(&self, user: String) -> Result<usize, BroadcastError> {
        let event = ServerEvent::UserTyping(TypingPayload { user });
        let json = serde_json::to_string(&event)?;
        let delivered = self.message_pusher.broadcast(&json).await?;
        Ok(delivered)
    }
}
