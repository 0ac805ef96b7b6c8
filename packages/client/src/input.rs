//! Keyboard intent capture.
//!
//! Enter submits the line; every other keystroke emits a typing signal.

use std::thread::{self, JoinHandle};

use rustyline::{
    Cmd, ConditionalEventHandler, DefaultEditor, Event, EventContext, EventHandler, KeyCode,
    KeyEvent, RepeatCount, error::ReadlineError,
};

use tokio::sync::oneshot;

use crate::{
    peer::PeerChannel,
    ui::{LinePrinter, prompt},
};

/// Whether the key submits the current line
pub fn is_submit_key(key: &KeyEvent) -> bool {
    matches!(key, KeyEvent(KeyCode::Enter, _))
}

/// Emits a `typing` event for every non-submit keystroke, then lets rustyline
/// handle the key as usual.
pub struct TypingEventHandler {
    channel: PeerChannel,
    user: String,
}

impl TypingEventHandler {
    pub fn new(channel: PeerChannel, user: String) -> Self {
        Self { channel, user }
    }

    /// Emit one `typing` event unless the key submits the line.
    ///
    /// No debounce: each keystroke yields its own event.
    pub fn on_key(&self, key: Option<&KeyEvent>) {
        if let Some(key) = key
            && !is_submit_key(key)
            && self.channel.typing(&self.user).is_err()
        {
            tracing::debug!("Typing signal dropped: outbound channel closed");
        }
    }
}

impl ConditionalEventHandler for TypingEventHandler {
    fn handle(
        &self,
        evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext,
    ) -> Option<Cmd> {
        self.on_key(evt.get(0));
        None
    }
}

/// Spawn a blocking thread running rustyline (synchronous readline).
///
/// The thread ends on Ctrl+C, Ctrl+D or once the outbound channel is closed; the
/// channel handle is dropped with it. The returned receiver yields the editor's
/// line printer, or `None` when the terminal does not support one.
pub fn spawn_input_thread(
    channel: PeerChannel,
    user: String,
) -> (JoinHandle<()>, oneshot::Receiver<Option<LinePrinter>>) {
    let (printer_tx, printer_rx) = oneshot::channel();

    let handle = thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let printer = match rl.create_external_printer() {
            Ok(printer) => Some(Box::new(printer) as LinePrinter),
            Err(e) => {
                tracing::debug!("No line printer: {}", e);
                None
            }
        };
        printer_tx.send(printer).ok();

        rl.bind_sequence(
            Event::Any,
            EventHandler::Conditional(Box::new(TypingEventHandler::new(
                channel.clone(),
                user.clone(),
            ))),
        );

        let prompt = prompt(&user);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str()).ok();
                    if channel.submit(&user, &line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    (handle, printer_rx)
}
