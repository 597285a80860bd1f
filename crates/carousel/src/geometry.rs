use serde::{Deserialize, Serialize};

/// Card width used when the first card cannot be measured.
pub const FALLBACK_CARD_WIDTH: f64 = 240.0;

/// Measurements of the slider, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselGeometry {
    pub card_count: usize,
    pub card_width: f64,
    pub gap: f64,
    /// Total scrollable width of the slider content.
    pub scroll_width: f64,
    /// Visible width of the slider.
    pub client_width: f64,
}

impl CarouselGeometry {
    /// A row of equal cards separated by `gap`, shown through `client_width`.
    pub fn uniform(card_count: usize, card_width: f64, gap: f64, client_width: f64) -> Self {
        let scroll_width =
            card_count as f64 * card_width + card_count.saturating_sub(1) as f64 * gap.max(0.0);
        Self {
            card_count,
            card_width,
            gap,
            scroll_width,
            client_width,
        }
    }

    /// Distance between the leading edges of two adjacent cards.
    pub fn step(&self) -> f64 {
        let width = if self.card_width.is_finite() && self.card_width > 0.0 {
            self.card_width
        } else {
            FALLBACK_CARD_WIDTH
        };
        let gap = if self.gap.is_finite() && self.gap > 0.0 {
            self.gap
        } else {
            0.0
        };
        width + gap
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Card index and the scroll offset that shows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselPosition {
    pub index: usize,
    pub offset: f64,
}

impl CarouselPosition {
    pub const START: Self = Self {
        index: 0,
        offset: 0.0,
    };
}

/// Position after `current`: the next card, or back to the start when the
/// next card would scroll past the end.
pub fn next_position(current: usize, geometry: &CarouselGeometry) -> CarouselPosition {
    if geometry.card_count == 0 {
        return CarouselPosition::START;
    }
    let index = (current % geometry.card_count + 1) % geometry.card_count;
    let offset = index as f64 * geometry.step();
    if offset > geometry.max_offset() {
        return CarouselPosition::START;
    }
    CarouselPosition { index, offset }
}

/// Carousel state: the index of the card currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one card.
    pub fn tick(&mut self, geometry: &CarouselGeometry) -> CarouselPosition {
        let position = next_position(self.index, geometry);
        self.index = position.index;
        position
    }
}
