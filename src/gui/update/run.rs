//! gui/update/run.rs
//! Run lifecycle: validate folder -> disable button -> worker thread -> report.

use std::path::PathBuf;

use iced::Task;
use log::{error, info};

use crate::core;
use crate::core::types::Summary;

use super::super::state::{Message, Tidytag};
use super::util::spawn_blocking;

pub(crate) fn normalize_pressed(state: &mut Tidytag) -> Task<Message> {
    if state.running {
        return Task::none();
    }

    let input = state.folder_input.trim();
    if input.is_empty() {
        state.status = "Enter a folder path first.".to_string();
        return Task::none();
    }

    let dir = PathBuf::from(input);
    let settings = state.settings.clone();

    state.running = true;
    state.skipped.clear();
    state.status = format!("Normalizing {}...", dir.display());

    Task::perform(
        spawn_blocking(move || core::normalize_folder(&dir, &settings).map_err(|e| e.to_string())),
        // worker death and fatal folder errors both arrive as Err
        |res| Message::NormalizeFinished(res.and_then(|inner| inner)),
    )
}

pub(crate) fn normalize_finished(
    state: &mut Tidytag,
    result: Result<Summary, String>,
) -> Task<Message> {
    // Always re-enable, whatever happened.
    state.running = false;

    match result {
        Ok(summary) => {
            info!("{}", summary.message());
            state.status = summary.headline();
            state.skipped = summary.skipped;
        }
        Err(e) => {
            error!("Run failed: {e}");
            state.status = format!("Error: {e}");
            state.skipped.clear();
        }
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Settings;

    fn idle_state(folder: &str) -> Tidytag {
        Tidytag {
            status: String::new(),
            running: false,
            folder_input: folder.to_string(),
            settings: Settings::default(),
            skipped: vec!["old.mp3 (no ID3 tag)".to_string()],
        }
    }

    #[test]
    fn empty_folder_input_does_not_start() {
        let mut state = idle_state("   ");
        let _ = normalize_pressed(&mut state);

        assert!(!state.running);
        assert_eq!(state.status, "Enter a folder path first.");
    }

    #[test]
    fn start_disables_and_second_press_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = idle_state(&dir.path().display().to_string());

        let _ = normalize_pressed(&mut state);
        assert!(state.running);
        assert!(state.skipped.is_empty());

        let status = state.status.clone();
        let _ = normalize_pressed(&mut state);
        assert!(state.running);
        assert_eq!(state.status, status);
    }

    #[test]
    fn finish_re_enables_on_error() {
        let mut state = idle_state("x");
        state.running = true;

        let _ = normalize_finished(&mut state, Err("cannot read folder".to_string()));

        assert!(!state.running);
        assert_eq!(state.status, "Error: cannot read folder");
        assert!(state.skipped.is_empty());
    }

    #[test]
    fn finish_shows_summary_and_skips() {
        let mut state = idle_state("x");
        state.running = true;

        let summary = Summary {
            examined: 2,
            renamed: 1,
            resized: 1,
            already_sized: 0,
            skipped: vec!["Nhac Tre.mp3 (no ID3 tag)".to_string()],
        };
        let _ = normalize_finished(&mut state, Ok(summary));

        assert!(!state.running);
        assert!(state.status.starts_with("Processed 1 MP3 file(s)"));
        assert_eq!(state.skipped, vec!["Nhac Tre.mp3 (no ID3 tag)".to_string()]);
    }
}
