//! Overlay composition for the bottom sheet.

use iced::widget::{column, container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length, Point};

use crate::handle_bar::{handle_bar, HandleBarStyle};

use super::message::SheetMessage;
use super::state::SheetState;

/// Opacity of the dimming layer behind the sheet.
pub const BACKDROP_OPACITY: f32 = 1.0 / 3.0;

/// Sheet body background behind the injected content.
const BODY_BACKGROUND: Color = Color::WHITE;

/// Stack a bottom sheet over `base`.
///
/// When the sheet is closed this returns `base` untouched. When open it
/// layers a tap-to-dismiss backdrop and a bottom-anchored panel (handle bar
/// + `content`) whose height follows the sheet's animated offset. All
/// interaction is surfaced as [`SheetMessage`]s through `on_event`; feed
/// them back into [`SheetState::update`].
pub fn bottom_sheet<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    state: &SheetState,
    style: HandleBarStyle,
    content: Element<'a, Message>,
    on_event: impl Fn(SheetMessage) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    if !state.is_open() {
        return base;
    }

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: BACKDROP_OPACITY,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..Default::default()
            }),
    )
    .on_press(on_event(SheetMessage::BackdropPressed));

    let grab_strip = mouse_area(handle_bar(style)).on_press(on_event(SheetMessage::Grabbed));

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BODY_BACKGROUND.into()),
            ..Default::default()
        });

    // The panel blocks interaction from falling through to the backdrop.
    let panel = opaque(
        container(column![grab_strip, body])
            .width(Length::Fill)
            .height(Length::Fixed(state.height())),
    );

    let anchored = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(iced::Bottom);

    // Pointer motion is routed through an outer area covering the whole
    // overlay, so a gesture keeps tracking even when the pointer leaves the
    // handle bar. Only track movement while a gesture is active.
    let mut area =
        mouse_area(stack![base, backdrop, anchored]).on_release(on_event(SheetMessage::Released));

    if state.is_dragging() {
        let on_move = on_event.clone();
        area = area.on_move(move |point: Point| on_move(SheetMessage::Dragged(point)));
    }

    area.into()
}
