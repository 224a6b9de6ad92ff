//! Tidytag GUI
//!
//! # What this program is
//! A small desktop app (built with `iced`) that prepares a folder of `.mp3`
//! files for a portable player:
//! - strips diacritics from file names ("Nhạc Trẻ.mp3" -> "Nhac Tre.mp3")
//! - shrinks the embedded cover to a 128x128 JPEG front cover
//!
//! # Layout
//! - `core` does all filesystem + tag + image work and knows nothing about the UI.
//! - `gui` holds state / messages / update / view.
//!
//! # Concurrency model
//! - A run can take a while on a big folder.
//! - So it runs on a separate thread; the button stays disabled until
//!   `Message::NormalizeFinished(...)` comes back, whatever the result.

mod core;
mod gui;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,tidytag=info"))
        .init();

    log::info!("Starting Tidytag");

    iced::application(gui::Tidytag::default, gui::update, gui::view)
        .title("Tidytag")
        .run()
}
