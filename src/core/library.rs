use std::path::{Path, PathBuf};

use log::warn;

use super::error::NormalizeError;

/// Snapshot the audio files directly inside `dir` (no recursion),
/// in filesystem enumeration order.
///
/// Only an unreadable `dir` is an error; a bad entry is logged and skipped.
pub fn list_audio_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, NormalizeError> {
    let entries = std::fs::read_dir(dir).map_err(|source| NormalizeError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("{dir:?}: skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if has_extension(&path, extension) && path.is_file() {
            out.push(path);
        }
    }

    Ok(out)
}

/// Case-insensitive "name ends in .<extension>" (so ".mp3" itself counts).
pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();

    let suffix_len = extension.len() + 1;
    name.len() >= suffix_len
        && name
            .get(name.len() - suffix_len..)
            .map(|suffix| suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn lists_only_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"").unwrap();
        fs::write(dir.path().join("B.MP3"), b"").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"").unwrap();
        fs::write(dir.path().join("mp3"), b"").unwrap();
        fs::write(dir.path().join(".mp3"), b"").unwrap();
        fs::write(dir.path().join("song.mp3.bak"), b"").unwrap();
        fs::create_dir(dir.path().join("folder.mp3")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.mp3"), b"").unwrap();

        let mut names: Vec<String> = list_audio_files(dir.path(), "mp3")
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![".mp3".to_string(), "B.MP3".to_string(), "a.mp3".to_string()]
        );
    }

    #[test]
    fn missing_folder_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = list_audio_files(&missing, "mp3").unwrap_err();
        assert!(matches!(err, NormalizeError::ReadDir { ref path, .. } if *path == missing));
    }
}
