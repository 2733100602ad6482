//! State and drag reducer for the bottom sheet overlay.

use std::time::Instant;

use crate::animation::Animated;

use super::message::{SheetEvent, SheetMessage};
use super::{drag_spring, show_spring, DRAG_DELAY};

/// Vertical travel bounds for the sheet height.
///
/// Host-supplied at [`SheetState::open`] and fixed for the lifetime of one
/// presentation. `min >= max` is not an error; it just leaves the sheet
/// immovable, since no drag candidate is strictly inside the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightBounds {
    pub min: f32,
    pub max: f32,
}

impl HeightBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Strictly-inside check used for drag commits. Candidates at or past a
    /// bound are rejected outright, so the sheet stalls at its last
    /// committed height rather than clamping to the boundary.
    fn admits(self, candidate: f32) -> bool {
        candidate > self.min && candidate < self.max
    }
}

/// An in-flight drag gesture on the handle bar.
#[derive(Debug, Clone, Copy, Default)]
struct DragGesture {
    /// Pointer position anchoring the gesture. The first motion event after
    /// the grab establishes it; deltas are measured against it from then on.
    origin: Option<f32>,
}

/// State for one bottom sheet overlay.
///
/// Owns visibility, the committed height (`offset`), the drag baseline, and
/// the spring-animated rendered height. All of it is reset on every
/// [`open`](Self::open); nothing survives across presentations.
#[derive(Debug, Clone)]
pub struct SheetState {
    is_open: bool,
    bounds: HeightBounds,
    /// Committed sheet height. Always inside the bounds while dragging.
    offset: f32,
    /// Height at the start of the current gesture; drag deltas apply to it.
    baseline: f32,
    drag: Option<DragGesture>,
    /// Rendered height trailing `offset` on a spring.
    height: Animated,
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetState {
    /// Create a hidden sheet.
    pub fn new() -> Self {
        Self {
            is_open: false,
            bounds: HeightBounds::new(0.0, 0.0),
            offset: 0.0,
            baseline: 0.0,
            drag: None,
            height: Animated::new(0.0, show_spring()).with_delay(DRAG_DELAY),
        }
    }

    /// Present the sheet with the given travel bounds. The committed height
    /// and drag baseline reset to `bounds.min`, and the rendered height
    /// springs up from nothing.
    pub fn open(&mut self, bounds: HeightBounds) {
        log::debug!("sheet open: min={} max={}", bounds.min, bounds.max);
        self.is_open = true;
        self.bounds = bounds;
        self.offset = bounds.min;
        self.baseline = bounds.min;
        self.drag = None;
        self.height.snap_to(0.0);
        self.height.set_spring(show_spring());
        self.height.animate_to(bounds.min);
    }

    /// Hide the sheet. The overlay unmounts on the next view pass; there is
    /// no collapse animation.
    pub fn close(&mut self) {
        self.is_open = false;
        self.drag = None;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn bounds(&self) -> HeightBounds {
        self.bounds
    }

    /// The committed sheet height.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The drag baseline deltas are measured against.
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// The rendered height for the current frame.
    pub fn height(&self) -> f32 {
        self.height.value().max(0.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the height spring still has frames to render.
    pub fn is_animating(&self) -> bool {
        self.is_open && self.height.is_animating()
    }

    /// Handle a sheet message. Returns an event when the widget mutated
    /// something the host owns (currently: dismissal).
    pub fn update(&mut self, message: SheetMessage) -> Option<SheetEvent> {
        match message {
            SheetMessage::BackdropPressed => {
                log::debug!("sheet dismissed via backdrop");
                self.close();
                Some(SheetEvent::Dismissed)
            }
            SheetMessage::Grabbed => {
                self.drag = Some(DragGesture::default());
                None
            }
            SheetMessage::Dragged(point) => {
                self.drag_to(point.y, Instant::now());
                None
            }
            SheetMessage::Released => {
                self.release();
                None
            }
            SheetMessage::Tick(now) => {
                self.height.tick(now);
                None
            }
        }
    }

    /// Pointer motion at vertical position `y` during a drag.
    ///
    /// Dragging upward (negative translation) makes the sheet taller.
    /// Candidates outside the open interval `(min, max)` are dropped, so
    /// overshooting a bound leaves the sheet at the last in-range height.
    fn drag_to(&mut self, y: f32, now: Instant) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let origin = *drag.origin.get_or_insert(y);
        let translation = y - origin;
        let candidate = self.baseline - translation;

        if self.bounds.admits(candidate) {
            self.offset = candidate;
            self.height.set_spring(drag_spring());
            self.height.animate_to_delayed(candidate, now);
        }
    }

    /// End the current gesture: the committed height becomes the baseline
    /// for the next one. Nothing else changes.
    fn release(&mut self) {
        if self.drag.take().is_some() {
            self.baseline = self.offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Instant {
        Instant::now()
    }

    /// Open a sheet with the bounds used throughout these tests.
    fn open_sheet(min: f32, max: f32) -> SheetState {
        let mut sheet = SheetState::new();
        sheet.open(HeightBounds::new(min, max));
        sheet
    }

    /// Drive a full gesture: grab, move through `positions`, release.
    fn drag(sheet: &mut SheetState, positions: &[f32]) {
        sheet.update(SheetMessage::Grabbed);
        for &y in positions {
            sheet.drag_to(y, now());
        }
        sheet.release();
    }

    #[test]
    fn open_resets_offset_and_baseline_to_min() {
        let mut sheet = SheetState::new();
        sheet.open(HeightBounds::new(100.0, 400.0));

        assert!(sheet.is_open());
        assert_eq!(sheet.offset(), 100.0);
        assert_eq!(sheet.baseline(), 100.0);
        // Entrance rises from nothing.
        assert_eq!(sheet.height(), 0.0);
        assert!(sheet.is_animating());
    }

    #[test]
    fn reopen_discards_previous_session_state() {
        let mut sheet = open_sheet(100.0, 400.0);
        drag(&mut sheet, &[500.0, 450.0]); // offset 150, baseline 150
        sheet.close();

        sheet.open(HeightBounds::new(100.0, 400.0));
        assert_eq!(sheet.offset(), 100.0);
        assert_eq!(sheet.baseline(), 100.0);
    }

    #[test]
    fn in_range_drag_commits_baseline_minus_translation() {
        let mut sheet = open_sheet(100.0, 400.0);

        sheet.update(SheetMessage::Grabbed);
        sheet.drag_to(500.0, now()); // establishes the origin
        sheet.drag_to(450.0, now()); // translation -50

        assert_eq!(sheet.offset(), 150.0);
        // Baseline only moves on release.
        assert_eq!(sheet.baseline(), 100.0);
    }

    #[test]
    fn out_of_range_drag_stalls_at_last_committed_height() {
        let mut sheet = open_sheet(100.0, 400.0);

        sheet.update(SheetMessage::Grabbed);
        sheet.drag_to(500.0, now());
        sheet.drag_to(450.0, now()); // offset 150
        sheet.drag_to(900.0, now()); // candidate -250, below min: dropped

        assert_eq!(sheet.offset(), 150.0);
    }

    #[test]
    fn boundary_values_are_rejected_not_clamped() {
        let mut sheet = open_sheet(100.0, 400.0);

        sheet.update(SheetMessage::Grabbed);
        sheet.drag_to(0.0, now());
        sheet.drag_to(-299.0, now()); // candidate 399: admitted
        assert_eq!(sheet.offset(), 399.0);

        sheet.drag_to(-300.0, now()); // candidate exactly 400: rejected
        assert_eq!(sheet.offset(), 399.0);
    }

    #[test]
    fn release_sets_baseline_to_offset() {
        let mut sheet = open_sheet(100.0, 400.0);
        drag(&mut sheet, &[500.0, 450.0]);

        assert_eq!(sheet.offset(), 150.0);
        assert_eq!(sheet.baseline(), 150.0);
        assert!(!sheet.is_dragging());
    }

    #[test]
    fn second_gesture_overshoot_stalls_at_prior_height() {
        // min=100 max=400. Show -> offset 100. Drag -50 -> 150, release.
        // Drag -400 -> candidate 550, out of range -> stays 150.
        let mut sheet = open_sheet(100.0, 400.0);
        assert_eq!(sheet.offset(), 100.0);

        drag(&mut sheet, &[1000.0, 950.0]);
        assert_eq!(sheet.offset(), 150.0);
        assert_eq!(sheet.baseline(), 150.0);

        drag(&mut sheet, &[1000.0, 600.0]);
        assert_eq!(sheet.offset(), 150.0);
        assert_eq!(sheet.baseline(), 150.0);
    }

    #[test]
    fn backdrop_tap_dismisses_without_touching_drag_state() {
        let mut sheet = open_sheet(100.0, 400.0);
        drag(&mut sheet, &[500.0, 420.0]); // offset 180

        let event = sheet.update(SheetMessage::BackdropPressed);

        assert_eq!(event, Some(SheetEvent::Dismissed));
        assert!(!sheet.is_open());
        assert_eq!(sheet.offset(), 180.0);
        assert_eq!(sheet.baseline(), 180.0);
    }

    #[test]
    fn motion_without_a_grab_is_ignored() {
        let mut sheet = open_sheet(100.0, 400.0);

        sheet.drag_to(500.0, now());
        sheet.drag_to(300.0, now());

        assert_eq!(sheet.offset(), 100.0);
    }

    #[test]
    fn release_without_a_gesture_changes_nothing() {
        let mut sheet = open_sheet(100.0, 400.0);
        sheet.release();

        assert_eq!(sheet.offset(), 100.0);
        assert_eq!(sheet.baseline(), 100.0);
    }

    #[test]
    fn inverted_bounds_make_the_sheet_immovable() {
        let mut sheet = open_sheet(400.0, 100.0);

        sheet.update(SheetMessage::Grabbed);
        sheet.drag_to(500.0, now());
        sheet.drag_to(250.0, now());

        // No candidate is strictly inside an empty interval.
        assert_eq!(sheet.offset(), 400.0);
    }

    #[test]
    fn second_gesture_measures_from_its_own_origin() {
        let mut sheet = open_sheet(100.0, 400.0);
        drag(&mut sheet, &[500.0, 450.0]); // offset 150

        // A fresh grab at a completely different pointer position must not
        // jump the sheet; only motion relative to the new origin counts.
        sheet.update(SheetMessage::Grabbed);
        sheet.drag_to(80.0, now());
        assert_eq!(sheet.offset(), 150.0);

        sheet.drag_to(30.0, now()); // translation -50
        assert_eq!(sheet.offset(), 200.0);
    }
}
