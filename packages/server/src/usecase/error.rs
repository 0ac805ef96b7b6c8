//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::MessagePushError;

/// ブロードキャストのエラー
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// イベントの JSON 化に失敗
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 配信に失敗
    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// ハブへの問い合わせのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    /// ハブのタスクが既に終了している
    #[error("Chat hub is no longer running")]
    Closed,
}
