//! Demo application state and iced implementation.

use iced::widget::{button, center, column, container, text};
use iced::{Element, Subscription, Task};

use sheet_widgets::{
    bottom_sheet, sheet, HandleBarStyle, HeightBounds, SheetEvent, SheetMessage, SheetState,
};

/// Travel bounds for the demo sheet.
const SHEET_MIN: f32 = 160.0;
const SHEET_MAX: f32 = 600.0;

#[derive(Debug, Clone)]
pub enum Message {
    /// Present the sheet.
    OpenSheet,
    /// Forwarded sheet widget messages.
    Sheet(SheetMessage),
}

#[derive(Default)]
pub struct DemoApp {
    sheet: SheetState,
    /// How many times the sheet was dismissed via the backdrop.
    dismissals: u32,
}

impl DemoApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSheet => {
                self.sheet.open(HeightBounds::new(SHEET_MIN, SHEET_MAX));
            }
            Message::Sheet(message) => {
                if let Some(SheetEvent::Dismissed) = self.sheet.update(message) {
                    self.dismissals += 1;
                    log::info!("sheet dismissed ({} so far)", self.dismissals);
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = center(
            column![
                text("sheet-widgets demo").size(24),
                text(format!("backdrop dismissals: {}", self.dismissals)).size(14),
                button(text("Show sheet")).on_press(Message::OpenSheet),
            ]
            .spacing(12)
            .align_x(iced::Center),
        )
        .into();

        let content: Element<'_, Message> = container(
            column![
                text("Drag the bar to resize").size(16),
                text(format!("committed height: {:.0}", self.sheet.offset())).size(14),
                text(format!(
                    "bounds: {:.0} to {:.0}",
                    self.sheet.bounds().min,
                    self.sheet.bounds().max
                ))
                .size(14),
            ]
            .spacing(8),
        )
        .padding(16)
        .into();

        bottom_sheet(
            base,
            &self.sheet,
            HandleBarStyle::default(),
            content,
            Message::Sheet,
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        sheet::subscription(&self.sheet).map(Message::Sheet)
    }
}
