//! Timer-driven carousel loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::geometry::{Carousel, CarouselGeometry, CarouselPosition};

/// Period between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2400);

/// The slider being driven: measured each tick, scrolled to each position.
pub trait CarouselView {
    fn geometry(&self) -> CarouselGeometry;
    fn scroll_to(&mut self, position: CarouselPosition);
}

/// Runs a [`Carousel`] on a fixed interval until shut down.
pub struct CarouselRunner {
    interval: Duration,
    max_ticks: Option<u64>,
    shutdown: Arc<Notify>,
}

impl CarouselRunner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_ticks: None,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Stop on its own after `ticks` advances.
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Handle that stops the loop via `notify_one`.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }

    /// Reset the view to the start, then advance once per interval.
    ///
    /// The first advance happens one full interval after the call. Returns
    /// the number of advances performed.
    pub async fn run<V>(&self, carousel: &mut Carousel, view: &mut V) -> u64
    where
        V: CarouselView + ?Sized,
    {
        view.scroll_to(CarouselPosition::START);

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0u64;

        info!(interval_ms = self.interval.as_millis() as u64, "carousel started");
        loop {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    let position = carousel.tick(&view.geometry());
                    debug!(index = position.index, offset = position.offset, "carousel advanced");
                    view.scroll_to(position);
                    ticks += 1;
                }
                _ = self.shutdown.notified() => {
                    info!("carousel shutting down");
                    break;
                }
            }
        }
        ticks
    }
}
