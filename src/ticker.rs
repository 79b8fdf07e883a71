use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

use crate::config::ticker_interval_ms;
use crate::feed::{self, SharedStore};

/// Recurring background activity: each firing runs one `tick` on the store.
/// Stoppable, and stopped on drop, so a torn-down view does not leak the
/// task.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(store: SharedStore) -> Ticker {
        let handle = tokio::spawn(async move {
            let mut timer = interval(Duration::from_millis(ticker_interval_ms()));
            // The first interval tick completes immediately; skip it so the
            // first real tick lands one full period in.
            timer.tick().await;
            loop {
                timer.tick().await;
                feed::lock(&store).tick();
            }
        });
        Ticker { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
