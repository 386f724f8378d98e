use crossterm::event::{KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::error;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    /// Terminal input failed; no further events follow.
    Error(String),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(
                std::time::Duration::from_millis(tick_rate_ms)
            );

            loop {
                let event = tokio::select! {
                    maybe_event = reader.next() => match maybe_event {
                        Some(Ok(crossterm::event::Event::Key(key))) => {
                            // Filter for Press only (Windows compatibility)
                            if key.kind != KeyEventKind::Press {
                                continue;
                            }
                            Event::Key(key)
                        }
                        Some(Ok(crossterm::event::Event::Resize(_, _))) => Event::Resize,
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            error!(error = %e, "terminal input failed");
                            let _ = tx.send(Event::Error(e.to_string()));
                            break;
                        }
                        None => break,
                    },
                    _ = tick_interval.tick() => Event::Tick,
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        EventHandler { rx }
    }

    /// Next event, or None once the terminal input stream has closed.
    /// A read failure arrives as [`Event::Error`] before the close.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
