//! Terminal rendering of the card carousel.

use crafted_carousel::{CarouselGeometry, CarouselPosition, CarouselView};
use tracing::warn;

use crate::terminal::Terminal;

/// A fixed-geometry slider drawn as one status line per position.
pub struct TerminalCarousel<'a> {
    geometry: CarouselGeometry,
    terminal: &'a Terminal,
    shown: u64,
    last: Option<CarouselPosition>,
}

impl<'a> TerminalCarousel<'a> {
    pub fn new(geometry: CarouselGeometry, terminal: &'a Terminal) -> Self {
        Self {
            geometry,
            terminal,
            shown: 0,
            last: None,
        }
    }

    /// Number of positions drawn so far, including the initial reset.
    pub fn shown(&self) -> u64 {
        self.shown
    }

    /// The position drawn most recently.
    pub fn last(&self) -> Option<CarouselPosition> {
        self.last
    }
}

impl CarouselView for TerminalCarousel<'_> {
    fn geometry(&self) -> CarouselGeometry {
        self.geometry
    }

    fn scroll_to(&mut self, position: CarouselPosition) {
        if let Err(e) = self.terminal.print_carousel(&position, self.geometry.card_count) {
            warn!(error = %e, "failed to draw carousel position");
        }
        self.shown += 1;
        self.last = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crafted_carousel::{Carousel, CarouselRunner};
    use std::time::Duration;

    #[tokio::test]
    async fn test_runner_drives_terminal_view() {
        let terminal = Terminal::new();
        let geometry = CarouselGeometry::uniform(6, 240.0, 16.0, 512.0);
        let mut view = TerminalCarousel::new(geometry, &terminal);
        let mut carousel = Carousel::new();

        let ticks = CarouselRunner::new(Duration::from_millis(1))
            .with_max_ticks(5)
            .run(&mut carousel, &mut view)
            .await;

        assert_eq!(ticks, 5);
        // Reset to the start, then 1, 2, 3, wrap to 0, 1.
        assert_eq!(view.shown(), 6);
        assert_eq!(view.last().map(|p| p.index), Some(1));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_view_counts_draws() {
        let terminal = Terminal::new();
        let geometry = CarouselGeometry::uniform(3, 100.0, 0.0, 100.0);
        let mut view = TerminalCarousel::new(geometry, &terminal);
        let mut carousel = Carousel::new();
        for _ in 0..1_000 {
            let position = carousel.tick(&view.geometry());
            view.scroll_to(position);
        }
        assert_eq!(view.shown(), 1_000);
        assert_eq!(view.last().map(|p| p.index), Some(carousel.index()));
    }
}
