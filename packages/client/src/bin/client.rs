//! Terminal chat client.
//!
//! Connects to the chat server and shows the whole message log, repainted on every change.
//! Press Enter to send the current line; every other keystroke tells the others you are typing.
//! Automatically reconnects on disconnection (up to 5 retries per outage, 5 seconds apart).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --user Alice
//! cargo run --bin hiroba-client -- -n Bob --newest-first
//! ```

use clap::Parser;

use hiroba_client::{DisplayOrder, run_client};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "WebSocket broadcast chat client", long_about = None)]
struct Args {
    /// Name shown next to your messages
    #[arg(short = 'n', long)]
    user: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Show the newest message first
    #[arg(long)]
    newest_first: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(&[env!("CARGO_CRATE_NAME")], "info");

    let args = Args::parse();
    let order = if args.newest_first {
        DisplayOrder::NewestFirst
    } else {
        DisplayOrder::Chronological
    };

    if let Err(e) = run_client(args.url, args.user, order).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
