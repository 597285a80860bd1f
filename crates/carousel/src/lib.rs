//! Auto-advancing card carousel.
//!
//! The next position is a pure function of the current index, the card
//! count and the slider geometry; [`CarouselRunner`] only supplies the
//! timer. Nothing here is shared with the rule workspace.

mod geometry;
mod runner;

pub use geometry::{next_position, Carousel, CarouselGeometry, CarouselPosition, FALLBACK_CARD_WIDTH};
pub use runner::{CarouselRunner, CarouselView, DEFAULT_INTERVAL};
