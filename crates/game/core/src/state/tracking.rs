//! Pointer movement and click sampling for the mousemap view.
//!
//! Coordinates are normalized to `[0, 1]` by the caller against the
//! playing area's pixel dimensions; the core stores them as-is. Sampling
//! is a plain append with no interaction with the sequencing state
//! machine beyond being gated on the Running status.

/// One normalized pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One click with its selection outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickSample {
    pub x: f32,
    pub y: f32,
    pub correct: bool,
}

/// Unbounded log of pointer activity for one session.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingLog {
    moves: Vec<PointerSample>,
    clicks: Vec<ClickSample>,
}

impl TrackingLog {
    pub fn clear(&mut self) {
        self.moves.clear();
        self.clicks.clear();
    }

    pub fn push_move(&mut self, sample: PointerSample) {
        self.moves.push(sample);
    }

    pub fn push_click(&mut self, sample: PointerSample, correct: bool) {
        self.clicks.push(ClickSample {
            x: sample.x,
            y: sample.y,
            correct,
        });
    }

    pub fn moves(&self) -> &[PointerSample] {
        &self.moves
    }

    pub fn clicks(&self) -> &[ClickSample] {
        &self.clicks
    }
}
