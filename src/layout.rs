//! Decorative scatter layout.
//!
//! Assigns each decorative element a pseudo-random position inside the
//! viewport so that no two bounding boxes overlap, best effort within a
//! bounded attempt budget. Placement is greedy and order-dependent: elements
//! are processed in caller order and an earlier unlucky placement can force
//! a later element into the overlap fallback even when a non-overlapping
//! assignment exists. There is no backtracking.
//!
//! The full placement set is rebuilt from scratch on every pass; nothing is
//! retained between passes.

use rand::Rng;

use crate::constants::{MAX_PLACEMENT_ATTEMPTS, VIEWPORT_PADDING};

/// An accepted bounding box for one element in one layout pass, in viewport
/// pixel coordinates. Ephemeral; recomputed every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge in viewport pixels.
    pub x: f32,
    /// Top edge in viewport pixels.
    pub y: f32,
    /// Box width in viewport pixels.
    pub width: f32,
    /// Box height in viewport pixels.
    pub height: f32,
}

impl Placement {
    /// Axis-aligned bounding-box intersection test. Two boxes intersect
    /// unless they are disjoint on the x axis or disjoint on the y axis.
    pub fn intersects(&self, other: &Placement) -> bool {
        let disjoint_x = self.x + self.width < other.x || self.x > other.x + other.width;
        let disjoint_y = self.y + self.height < other.y || self.y > other.y + other.height;
        !disjoint_x && !disjoint_y
    }
}

/// A position expressed as percentages of the viewport, so the element stays
/// anchored proportionally when the viewport is resized between passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Left offset as a percentage of the viewport width, `0..=100`.
    pub left_pct: f32,
    /// Top offset as a percentage of the viewport height, `0..=100`.
    pub top_pct: f32,
}

impl Anchor {
    /// Converts a pixel position into viewport percentages.
    pub fn from_pixels(x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            left_pct: x / viewport_width * 100.0,
            top_pct: y / viewport_height * 100.0,
        }
    }

    /// Converts back to pixels for a (possibly different) viewport size.
    pub fn to_pixels(&self, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
        (
            self.left_pct / 100.0 * viewport_width,
            self.top_pct / 100.0 * viewport_height,
        )
    }
}

/// One decorative element handed to the placer. The caller declares the
/// square side length; the placer writes the accepted anchor, or `None`
/// when the element cannot fit in the viewport at all.
#[derive(Debug, Clone)]
pub struct DecorElement {
    /// Side length of the square bounding box, in viewport pixels.
    pub size: f32,
    /// Position assigned by the most recent scatter pass.
    pub anchor: Option<Anchor>,
}

impl DecorElement {
    /// Creates an element of the given size with no position assigned yet.
    pub fn new(size: f32) -> Self {
        Self { size, anchor: None }
    }
}

/// Runs one full scatter pass over `elements`, mutating each element's
/// anchor. Returns the committed placements of the pass.
///
/// For each element in order:
/// 1. Keep [`VIEWPORT_PADDING`] clear of every viewport edge.
/// 2. Sample up to [`MAX_PLACEMENT_ATTEMPTS`] uniform positions, accepting
///    the first one disjoint from every committed placement.
/// 3. If the budget runs out, accept the last sample anyway. Overlap is a
///    permitted fallback, not an error.
///
/// An element whose padded box cannot fit in the viewport (the sampling span
/// would be negative on either axis) is skipped: its anchor is cleared and
/// nothing is committed for it.
pub fn scatter<R: Rng>(
    elements: &mut [DecorElement],
    viewport_width: f32,
    viewport_height: f32,
    rng: &mut R,
) -> Vec<Placement> {
    let mut committed: Vec<Placement> = Vec::with_capacity(elements.len());

    for element in elements.iter_mut() {
        let size = element.size;
        let span_x = viewport_width - size - 2.0 * VIEWPORT_PADDING;
        let span_y = viewport_height - size - 2.0 * VIEWPORT_PADDING;

        if span_x < 0.0 || span_y < 0.0 {
            // Cannot fit: clear any stale anchor and move on.
            element.anchor = None;
            continue;
        }

        let mut candidate = sample_candidate(size, span_x, span_y, rng);
        for _ in 1..MAX_PLACEMENT_ATTEMPTS {
            if committed.iter().all(|placed| !candidate.intersects(placed)) {
                break;
            }
            candidate = sample_candidate(size, span_x, span_y, rng);
        }

        element.anchor = Some(Anchor::from_pixels(
            candidate.x,
            candidate.y,
            viewport_width,
            viewport_height,
        ));
        committed.push(candidate);
    }

    committed
}

fn sample_candidate<R: Rng>(size: f32, span_x: f32, span_y: f32, rng: &mut R) -> Placement {
    Placement {
        x: VIEWPORT_PADDING + rng.random_range(0.0..=span_x),
        y: VIEWPORT_PADDING + rng.random_range(0.0..=span_y),
        width: size,
        height: size,
    }
}
