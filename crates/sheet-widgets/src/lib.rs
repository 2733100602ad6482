//! Reusable sheet widgets for iced applications.
//!
//! The main export is a draggable bottom sheet overlay: a bottom-anchored
//! panel with a grab-handle bar, a dimmed tap-to-dismiss backdrop, spring
//! animations, and host-supplied min/max travel bounds.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: pure data owned by the host ([`SheetState`])
//! - **View functions**: take state + a message mapper, return
//!   `Element<Message>` ([`bottom_sheet`], [`handle_bar`])
//! - **Canvas programs**: custom drawing for the handle bar silhouette
//!
//! Hosts keep a [`SheetState`], call [`SheetState::open`] /
//! [`SheetState::close`] to control visibility, route [`SheetMessage`]s from
//! the view into [`SheetState::update`], and batch [`sheet::subscription`]
//! into their subscriptions so the height spring receives frames.

pub mod animation;
pub mod handle_bar;
pub mod outline;
pub mod sheet;

pub use animation::{Animated, Spring};
pub use handle_bar::{handle_bar, HandleBarStyle, HANDLE_BAR_HEIGHT};
pub use outline::{rounded_top, Segment};
pub use sheet::{
    bottom_sheet, HeightBounds, SheetEvent, SheetMessage, SheetState, BACKDROP_OPACITY,
};
