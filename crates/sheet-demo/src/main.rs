//! Bottom sheet demo host.
//!
//! Minimal iced application exercising the `sheet-widgets` bottom sheet:
//! a button presents the sheet, the handle bar drags it between its bounds,
//! and tapping the backdrop dismisses it.

mod app;

use iced::{Size, Task};

use app::{DemoApp, Message};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("sheet-demo starting up");

    iced::application(DemoApp::default, update, view)
        .subscription(subscription)
        .title("Bottom Sheet Demo")
        .window_size(Size::new(420.0, 760.0))
        .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &DemoApp) -> iced::Subscription<Message> {
    app.subscription()
}
