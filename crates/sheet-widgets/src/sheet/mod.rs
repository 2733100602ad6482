//! Draggable bottom sheet overlay.
//!
//! A panel anchored to the bottom edge of the window, stacked above the
//! host's content with a dimmed tap-to-dismiss backdrop. The handle bar at
//! the top of the panel can be dragged to resize the sheet between a
//! host-supplied minimum and maximum height; every committed change is
//! spring-animated so the panel trails the pointer instead of snapping.
//!
//! # Architecture
//!
//! State, messages, and view live in separate modules:
//!
//! - [`SheetState`]: visibility, committed height, drag baseline, and the
//!   spring-animated rendered height. Hosts keep one per sheet and route
//!   [`SheetMessage`]s into [`SheetState::update`].
//! - [`bottom_sheet`]: view function stacking base content, backdrop, and
//!   the panel.
//! - [`subscription`]: frame ticks while the height spring is in motion.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  host content                │
//! │  ░░░░░░░ backdrop ░░░░░░░░░  │  tap → Dismissed
//! │  ╭─────────━━━─────────────╮ │  ← handle bar (drag to resize)
//! │  │  sheet content          │ │
//! └──┴─────────────────────────┴─┘
//! ```

mod message;
mod state;
mod view;

use std::time::Duration;

use iced::Subscription;

use crate::animation::Spring;

pub use message::{SheetEvent, SheetMessage};
pub use state::{HeightBounds, SheetState};
pub use view::{bottom_sheet, BACKDROP_OPACITY};

/// Response and damping for the drag spring: quick and lightly damped so
/// the panel visibly trails the pointer.
pub const DRAG_RESPONSE: f32 = 0.3;
pub const DRAG_DAMPING_FRACTION: f32 = 0.3;

/// Commits during a drag start animating after this delay.
pub const DRAG_DELAY: Duration = Duration::from_millis(333);

/// Frame interval while the sheet height is animating.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Spring driving drag-committed height changes.
pub(crate) fn drag_spring() -> Spring {
    Spring::with_duration(DRAG_RESPONSE, DRAG_DAMPING_FRACTION)
}

/// Spring driving the entrance animation.
pub(crate) fn show_spring() -> Spring {
    Spring::default()
}

/// Animation frames for the sheet, active only while the spring is moving.
/// An idle sheet schedules nothing.
pub fn subscription(state: &SheetState) -> Subscription<SheetMessage> {
    if state.is_animating() {
        iced::time::every(TICK_INTERVAL).map(SheetMessage::Tick)
    } else {
        Subscription::none()
    }
}
