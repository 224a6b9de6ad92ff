//! GUI renderer (reads state, produces widgets; no mutation).

use iced::Length;
use iced::widget::{Column, button, column, row, scrollable, text, text_input};

use super::state::{Message, Tidytag};

pub(crate) fn view(state: &Tidytag) -> Column<'_, Message> {
    let header = column![
        text("MP3 cleanup for portable players").size(20),
        text(format!(
            "Removes accents from file names and resizes covers to {0}x{0}.",
            state.settings.thumbnail_size
        ))
        .size(14),
    ]
    .spacing(4);

    let folder_input = text_input("Folder containing .mp3 files", &state.folder_input)
        .on_input(Message::FolderInputChanged)
        .on_submit(Message::NormalizePressed)
        .width(Length::Fill);

    // No on_press while running = disabled.
    let start_btn = if state.running {
        button("Working...")
    } else {
        button("Normalize folder").on_press(Message::NormalizePressed)
    };

    let controls = row![folder_input, start_btn].spacing(8);

    let mut skipped_list = column![];
    for line in &state.skipped {
        skipped_list = skipped_list.push(text(line.as_str()).size(13));
    }
    let skipped_panel = scrollable(skipped_list.spacing(2)).height(Length::Fill);

    column![header, controls, text(state.status.as_str()), skipped_panel]
        .spacing(12)
        .padding(12)
}
