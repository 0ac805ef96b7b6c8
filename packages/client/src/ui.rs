//! UI utilities for the client.

use std::io::Write;

use rustyline::ExternalPrinter;

use crate::view::ChatView;

/// Clear the screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Printer that writes above the line being edited and redraws it afterwards
pub type LinePrinter = Box<dyn ExternalPrinter + Send>;

/// Prompt shown while composing
pub fn prompt(user: &str) -> String {
    format!("{}> ", user)
}

/// Redisplay the prompt after receiving a message
pub fn redisplay_prompt(user: &str) {
    print!("{}", prompt(user));
    std::io::stdout().flush().ok();
}

/// Full-screen frame for the current view
pub fn frame(view: &ChatView) -> String {
    format!("{}{}", CLEAR_SCREEN, view.render())
}

/// Terminal output of the client.
///
/// With a line printer attached, rustyline redraws the prompt together with the
/// unsent input after every repaint. Without one, only the bare prompt is shown
/// again until the next keystroke.
pub struct Screen {
    user: String,
    printer: Option<LinePrinter>,
}

impl Screen {
    pub fn new(user: &str, printer: Option<LinePrinter>) -> Self {
        Self {
            user: user.to_string(),
            printer,
        }
    }

    /// Plain stdout output
    pub fn stdout(user: &str) -> Self {
        Self::new(user, None)
    }

    /// Replace the whole screen with the current view
    pub fn repaint(&mut self, view: &ChatView) {
        let frame = frame(view);

        if let Some(printer) = self.printer.as_mut() {
            match printer.print(frame.clone()) {
                Ok(()) => return,
                Err(e) => {
                    tracing::debug!("Line printer unavailable, using stdout: {}", e);
                    self.printer = None;
                }
            }
        }

        print!("{}", frame);
        redisplay_prompt(&self.user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiroba_shared::protocol::{ChatEntry, MessageLogPayload, ServerEvent};
    use std::sync::{Arc, Mutex};

    struct RecordingPrinter {
        printed: Arc<Mutex<Vec<String>>>,
    }

    impl ExternalPrinter for RecordingPrinter {
        fn print(&mut self, msg: String) -> rustyline::Result<()> {
            self.printed.lock().unwrap().push(msg);
            Ok(())
        }
    }

    #[test]
    fn test_frame_clears_screen_before_log() {
        // テスト項目: 画面クリアの後にログ全体が描画される
        // given (前提条件):
        let mut view = ChatView::default();
        view.apply(ServerEvent::NewMessage(MessageLogPayload {
            messages: vec![ChatEntry::new("A", "hi")],
        }));

        // when (操作):
        let result = frame(&view);

        // then (期待する結果):
        assert_eq!(result, format!("{}{}", CLEAR_SCREEN, view.render()));
    }

    #[test]
    fn test_repaint_goes_through_line_printer() {
        // テスト項目: ラインプリンタがある場合、再描画はプリンタ経由で行われる（入力中の行が再表示される）
        // given (前提条件):
        let printed = Arc::new(Mutex::new(Vec::new()));
        let printer = RecordingPrinter {
            printed: printed.clone(),
        };
        let mut screen = Screen::new("alice", Some(Box::new(printer)));
        let view = ChatView::default();

        // when (操作):
        screen.repaint(&view);
        screen.repaint(&view);

        // then (期待する結果):
        assert_eq!(*printed.lock().unwrap(), vec![frame(&view), frame(&view)]);
    }
}
