//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use crate::core::config::Settings;
use crate::core::types::Summary;

/// App state
pub(crate) struct Tidytag {
    pub status: String,
    /// True while a run is on the worker thread; the start button is disabled.
    pub running: bool,

    pub folder_input: String,
    pub settings: Settings,

    /// Skip/error lines from the last finished run.
    pub skipped: Vec<String>,
}

impl Default for Tidytag {
    fn default() -> Self {
        let settings = Settings::load_or_default();
        let folder_input = settings
            .default_folder
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            status: "Pick a folder of MP3 files, then Normalize.".to_string(),
            running: false,
            folder_input,
            settings,
            skipped: Vec::new(),
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    FolderInputChanged(String),

    NormalizePressed,
    NormalizeFinished(Result<Summary, String>),
}
