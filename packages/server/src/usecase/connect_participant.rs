//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 接続数の加算と System エントリの追加が正しく行われることを確認
//! - 新規接続は登録後にブロードキャストされるため、新規接続自身もログを受け取ることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初の接続、2 番目の接続
//! - 異常系：配信失敗時もログと接続数は更新される

use std::sync::Arc;

use crate::domain::{ChatEntry, ChatState, ConnectionId, MessagePusher, PusherChannel};

use super::{broadcast_relay::BroadcastRelay, error::BroadcastError};

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// MessagePusher（接続レジストリ）
    message_pusher: Arc<dyn MessagePusher>,
    relay: BroadcastRelay,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>, relay: BroadcastRelay) -> Self {
        Self {
            message_pusher,
            relay,
        }
    }

    /// 参加者接続を実行
    ///
    /// 1. 接続を登録
    /// 2. 接続数を加算
    /// 3. "N users are connected" を追加
    /// 4. ログ全体を全接続（新規接続を含む）にブロードキャスト
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - 加算後の接続数
    /// * `Err(BroadcastError)` - 配信失敗（ログと接続数は更新済み）
    pub async fn execute(
        &self,
        state: &mut ChatState,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<i64, BroadcastError> {
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        let session_count = state.registry.on_connect();
        state.log.append(ChatEntry::presence(session_count));

        self.relay.broadcast_all(&state.log).await?;

        Ok(session_count)
    }
}
