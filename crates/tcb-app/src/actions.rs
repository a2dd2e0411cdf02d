//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Each task reports its outcome back as a [`Message`].
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, clipboard: &C)
where
    C: Clipboard + Clone + Sync + 'static,
{
    match action {
        UpdateAction::WriteClipboard { text } => {
            let clipboard = clipboard.clone();
            tokio::spawn(async move {
                let msg = match clipboard.write_text(&text).await {
                    Ok(()) => {
                        debug!("Copied {} bytes to clipboard", text.len());
                        Message::ClipboardWritten
                    }
                    Err(e) => Message::ClipboardWriteFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    warn!("Clipboard write finished after the event loop closed");
                }
            });
        }

        UpdateAction::ReadClipboard => {
            let clipboard = clipboard.clone();
            tokio::spawn(async move {
                let msg = match clipboard.read_text().await {
                    Ok(text) => Message::ClipboardRead { text },
                    Err(e) => Message::ClipboardReadFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(msg).await.is_err() {
                    warn!("Clipboard read finished after the event loop closed");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{MemoryClipboard, SystemClipboard};
    use std::time::Duration;

    #[tokio::test]
    async fn test_write_clipboard_reports_success() {
        let clipboard = MemoryClipboard::new();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::WriteClipboard {
                text: "python -u run.py '{}'".into(),
            },
            tx,
            &clipboard,
        );

        assert!(matches!(rx.recv().await, Some(Message::ClipboardWritten)));
        assert_eq!(
            clipboard.contents().await.as_deref(),
            Some("python -u run.py '{}'")
        );
    }

    #[tokio::test]
    async fn test_read_clipboard_returns_text() {
        let clipboard = MemoryClipboard::with_text("foo bar");
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::ReadClipboard, tx, &clipboard);

        match rx.recv().await {
            Some(Message::ClipboardRead { text }) => assert_eq!(text, "foo bar"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_tools_report_failures() {
        let clipboard = SystemClipboard::new(None, None, Duration::from_millis(100));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::ReadClipboard, tx.clone(), &clipboard);
        assert!(matches!(
            rx.recv().await,
            Some(Message::ClipboardReadFailed { .. })
        ));

        handle_action(UpdateAction::WriteClipboard { text: "x".into() }, tx, &clipboard);
        assert!(matches!(
            rx.recv().await,
            Some(Message::ClipboardWriteFailed { .. })
        ));
    }
}
