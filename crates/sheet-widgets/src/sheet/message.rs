//! Messages for the bottom sheet overlay.

use std::time::Instant;

use iced::Point;

/// Messages emitted by the sheet overlay's interactive layers.
#[derive(Debug, Clone, Copy)]
pub enum SheetMessage {
    /// The dimmed backdrop behind the sheet was tapped.
    BackdropPressed,

    /// The handle bar was grabbed; a drag gesture begins.
    Grabbed,

    /// The pointer moved while a drag gesture is active.
    Dragged(Point),

    /// The pointer was released, ending any drag gesture.
    Released,

    /// Animation frame while the sheet height is in motion.
    Tick(Instant),
}

/// Widget-initiated transitions the host may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// The sheet dismissed itself (backdrop tap). The host should drop
    /// whatever flag or route keeps the sheet presented.
    Dismissed,
}
