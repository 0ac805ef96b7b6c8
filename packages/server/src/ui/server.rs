//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::ChatHubHandle;

use super::{
    handler::{get_messages, get_stats, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let hub = ChatHub::spawn(Arc::new(WebSocketMessagePusher::new()));
/// let server = Server::new(hub);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// ChatHub へのハンドル
    hub: ChatHubHandle,
}

impl Server {
    /// Create a new Server instance
    pub fn new(hub: ChatHubHandle) -> Self {
        Self { hub }
    }

    /// Build the router with every endpoint
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            hub: self.hub.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .route("/api/messages", get(get_messages))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the WebSocket chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Press Ctrl+C to shutdown gracefully");
        self.serve_with_shutdown(listener, shutdown_signal()).await?;
        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("WebSocket chat server listening on {}", addr);
        tracing::info!("Connect to: ws://{}/ws", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
