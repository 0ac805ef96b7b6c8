//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 受け取ったエントリが検証なしでそのままログに追加されることを確認
//! - 追加後のログ全体が全接続に配信されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信とブロードキャスト
//! - エッジケース：空のユーザー名・本文

use crate::domain::{ChatEntry, ChatState};

use super::{broadcast_relay::BroadcastRelay, error::BroadcastError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    relay: BroadcastRelay,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(relay: BroadcastRelay) -> Self {
        Self { relay }
    }

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - ログを受け取った接続数
    /// * `Err(BroadcastError)` - 配信失敗（ログには追加済み）
    pub async fn execute(
        &self,
        state: &mut ChatState,
        entry: ChatEntry,
    ) -> Result<usize, BroadcastError> {
        state.log.append(entry);
        self.relay.broadcast_all(&state.log).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockMessagePusher;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_send_message_appends_and_broadcasts() {
        // テスト項目: メッセージがログに追加され、ログ全体が配信される
        // given (前提条件):
        let mut state = ChatState::new();
        state.log.append(ChatEntry::presence(1));

        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_broadcast()
            .withf(|content| {
                content.starts_with(r#"{"event":"new-message""#)
                    && content.ends_with(r#"{"user":"A","message":"hi"}]}}"#)
            })
            .times(1)
            .returning(|_| Ok(2));
        let usecase = SendMessageUseCase::new(BroadcastRelay::new(Arc::new(pusher)));

        // when (操作):
        let result = usecase
            .execute(&mut state, ChatEntry::new("A", "hi"))
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), 2);
        assert_eq!(
            state.log.snapshot(),
            &[ChatEntry::presence(1), ChatEntry::new("A", "hi")]
        );
    }

    #[tokio::test]
    async fn test_send_message_accepts_empty_entry() {
        // テスト項目: 空のユーザー名・本文もそのまま追加される
        // given (前提条件):
        let mut state = ChatState::new();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().times(1).returning(|_| Ok(1));
        let usecase = SendMessageUseCase::new(BroadcastRelay::new(Arc::new(pusher)));

        // when (操作):
        let result = usecase.execute(&mut state, ChatEntry::new("", "")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(state.log.snapshot(), &[ChatEntry::new("", "")]);
    }

    #[tokio::test]
    async fn test_send_message_does_not_touch_session_count() {
        // テスト項目: メッセージ送信は接続数を変更しない
        // given (前提条件):
        let mut state = ChatState::new();
        state.registry.on_connect();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().returning(|_| Ok(1));
        let usecase = SendMessageUseCase::new(BroadcastRelay::new(Arc::new(pusher)));

        // when (操作):
        usecase
            .execute(&mut state, ChatEntry::new("A", "hi"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(state.registry.count(), 1);
    }
}
