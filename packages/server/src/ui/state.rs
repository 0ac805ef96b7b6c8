//! Server state shared with handlers.

use crate::usecase::ChatHubHandle;

/// Shared application state
pub struct AppState {
    /// ChatHub（チャット状態の唯一の所有者へのハンドル）
    pub hub: ChatHubHandle,
}
