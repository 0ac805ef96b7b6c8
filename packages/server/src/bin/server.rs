//! Broadcast chat server.
//!
//! Pushes the full message log to every connected client whenever it changes.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    infrastructure::message_pusher::WebSocketMessagePusher, ui::Server, usecase::ChatHub,
};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "WebSocket broadcast chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_CRATE_NAME"), "tower_http"], "debug");

    let args = Args::parse();

    // 1. Connection registry (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 2. Hub actor owning the message log and session count
    let hub = ChatHub::spawn(message_pusher);

    // 3. Create and run the server
    let server = Server::new(hub);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
