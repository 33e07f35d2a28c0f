use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::error::Result;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal resized; carries the new row count.
    Resize(u16),
}

/// Async event handler that polls crossterm events and forwards them via a channel.
///
/// The reader task stops once the handler (and with it the receiver) is dropped.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new EventHandler polling at `poll_interval`.
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                if tx.is_closed() {
                    break;
                }
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(_, rows)) => tx.send(Event::Resize(rows)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event read failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }
            }
            tracing::debug!("event reader stopped");
        });

        Self { rx }
    }

    /// Receive the next event (blocks until available).
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| crate::error::AppError::Terminal("Event channel closed".into()))
    }
}
