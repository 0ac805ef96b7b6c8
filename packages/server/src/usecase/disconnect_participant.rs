//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 接続数の減算と System エントリの追加を確認
//! - 切断した接続は配信対象から外れた後にブロードキャストされることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人から 1 人への切断
//! - エッジケース：重複した切断で接続数が負になる

use std::sync::Arc;

use crate::domain::{ChatEntry, ChatState, ConnectionId, MessagePusher};

use super::{broadcast_relay::BroadcastRelay, error::BroadcastError};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// MessagePusher（接続レジストリ）
    message_pusher: Arc<dyn MessagePusher>,
    relay: BroadcastRelay,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>, relay: BroadcastRelay) -> Self {
        Self {
            message_pusher,
            relay,
        }
    }

    /// 参加者切断を実行
    ///
    /// 登録を解除してから接続数を減算し、"N users are connected" を追加して
    /// 残りの全接続にブロードキャストします。
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - 減算後の接続数（下限なし）
    /// * `Err(BroadcastError)` - 配信失敗（ログと接続数は更新済み）
    pub async fn execute(
        &self,
        state: &mut ChatState,
        connection_id: ConnectionId,
    ) -> Result<i64, BroadcastError> {
        self.message_pusher.unregister_client(&connection_id).await;

        let session_count = state.registry.on_disconnect();
        state.log.append(ChatEntry::presence(session_count));

        self.relay.broadcast_all(&state.log).await?;

        Ok(session_count)
    }
}
