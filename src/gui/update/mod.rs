//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Tidytag};

mod run;
mod util;

pub(crate) fn update(state: &mut Tidytag, message: Message) -> Task<Message> {
    match message {
        Message::FolderInputChanged(s) => {
            state.folder_input = s;
            Task::none()
        }

        Message::NormalizePressed => run::normalize_pressed(state),
        Message::NormalizeFinished(result) => run::normalize_finished(state, result),
    }
}
