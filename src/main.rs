//! Vertical slider demo
//! A single slider with volume icons and a live status line

use vertical_slider::app::App;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(iced::Size::new(360.0, 560.0))
        .antialiasing(true)
        .run()
}
