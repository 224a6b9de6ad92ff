//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No GUI code
//! - No filesystem code
//!
//! `TrackRecord` represents ONE examined `.mp3` file plus what happened to it.
//! `Summary` folds a whole run into the one message the UI shows at the end.

use std::fmt;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cover was replaced by the resized thumbnail (the file may also have been renamed).
    RenamedAndResized,
    /// The only embedded picture is already our thumbnail; nothing rewritten.
    AlreadyThumbnail,
    /// The normalized name is taken by another file. Nothing was touched.
    NameCollision,
    /// No ID3 tag in the file.
    MissingTagContainer,
    /// ID3 tag present, but no attached picture.
    NoEmbeddedImage,
    /// Decode / encode / IO failure for this file only.
    Error(String),
}

impl Outcome {
    /// Short reason used in the skip list, `None` for success outcomes.
    pub fn skip_reason(&self) -> Option<String> {
        match self {
            Outcome::RenamedAndResized | Outcome::AlreadyThumbnail => None,
            Outcome::NameCollision => Some("name collision".to_string()),
            Outcome::MissingTagContainer => Some("no ID3 tag".to_string()),
            Outcome::NoEmbeddedImage => Some("no embedded cover".to_string()),
            Outcome::Error(detail) => Some(format!("error: {detail}")),
        }
    }
}

/// One line of the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// File name as found on disk.
    pub original: String,
    /// Diacritic-free name (equal to `original` when there was nothing to strip).
    pub normalized: String,
    /// The file was actually moved to `normalized`.
    pub renamed: bool,
    pub outcome: Outcome,
}

impl TrackRecord {
    /// Name the file has on disk after processing.
    pub fn current_name(&self) -> &str {
        if self.renamed {
            &self.normalized
        } else {
            &self.original
        }
    }

    /// Skip-list line, `None` for success outcomes.
    pub fn skip_line(&self) -> Option<String> {
        match &self.outcome {
            Outcome::NameCollision => Some(format!(
                "{} (name collision with {})",
                self.original, self.normalized
            )),
            other => other
                .skip_reason()
                .map(|reason| format!("{} ({reason})", self.current_name())),
        }
    }
}

/// Aggregate of a whole directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub examined: usize,
    pub renamed: usize,
    pub resized: usize,
    pub already_sized: usize,
    /// "<name on disk> (<reason>)" for every skipped or failed file.
    pub skipped: Vec<String>,
}

impl Summary {
    pub fn push(&mut self, record: &TrackRecord) {
        self.examined += 1;

        if record.renamed {
            self.renamed += 1;
        }

        match &record.outcome {
            Outcome::RenamedAndResized => self.resized += 1,
            Outcome::AlreadyThumbnail => self.already_sized += 1,
            _ => {
                if let Some(line) = record.skip_line() {
                    self.skipped.push(line);
                }
            }
        }
    }

    /// Files that came out of the run with a valid thumbnail.
    pub fn processed(&self) -> usize {
        self.resized + self.already_sized
    }

    /// First line of the report: counts only.
    pub fn headline(&self) -> String {
        let mut msg = format!(
            "Processed {} MP3 file(s): {} renamed, {} cover(s) resized",
            self.processed(),
            self.renamed,
            self.resized
        );
        if self.already_sized > 0 {
            msg.push_str(&format!(", {} already at thumbnail size", self.already_sized));
        }
        msg.push('.');
        msg
    }

    /// The single human-readable report shown after a run.
    pub fn message(&self) -> String {
        let mut msg = self.headline();
        if !self.skipped.is_empty() {
            msg.push_str(&format!(
                "\n\n{} file(s) skipped or failed:\n{}",
                self.skipped.len(),
                self.skipped.join("\n")
            ));
        }
        msg
    }
}

impl FromIterator<TrackRecord> for Summary {
    fn from_iter<I: IntoIterator<Item = TrackRecord>>(iter: I) -> Self {
        let mut summary = Summary::default();
        for record in iter {
            summary.push(&record);
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(original: &str, normalized: &str, outcome: Outcome) -> TrackRecord {
        TrackRecord {
            original: original.to_string(),
            normalized: normalized.to_string(),
            renamed: original != normalized && outcome != Outcome::NameCollision,
            outcome,
        }
    }

    #[test]
    fn collision_line_names_the_file_left_behind() {
        let r = record("Sóng.mp3", "Song.mp3", Outcome::NameCollision);
        assert_eq!(r.current_name(), "Sóng.mp3");
        assert_eq!(
            r.skip_line().unwrap(),
            "Sóng.mp3 (name collision with Song.mp3)"
        );
    }

    #[test]
    fn failed_rename_is_not_counted() {
        let r = TrackRecord {
            original: "Bài.mp3".to_string(),
            normalized: "Bai.mp3".to_string(),
            renamed: false,
            outcome: Outcome::Error("IO error: not found".to_string()),
        };
        let summary: Summary = vec![r].into_iter().collect();

        assert_eq!(summary.renamed, 0);
        assert_eq!(summary.skipped, vec!["Bài.mp3 (error: IO error: not found)".to_string()]);
    }

    #[test]
    fn summary_counts_and_skip_lines() {
        let summary: Summary = vec![
            record("Bài.mp3", "Bai.mp3", Outcome::RenamedAndResized),
            record("Cover.mp3", "Cover.mp3", Outcome::AlreadyThumbnail),
            record("Nhạc.mp3", "Nhac.mp3", Outcome::MissingTagContainer),
            record("x.mp3", "x.mp3", Outcome::Error("bad jpeg".to_string())),
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.examined, 4);
        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.resized, 1);
        assert_eq!(summary.already_sized, 1);
        assert_eq!(summary.processed(), 2);
        assert_eq!(
            summary.skipped,
            vec![
                "Nhac.mp3 (no ID3 tag)".to_string(),
                "x.mp3 (error: bad jpeg)".to_string()
            ]
        );

        let msg = summary.message();
        assert!(msg.starts_with("Processed 2 MP3 file(s): 2 renamed, 1 cover(s) resized"));
        assert!(msg.contains("2 file(s) skipped or failed:\nNhac.mp3 (no ID3 tag)"));
    }

    #[test]
    fn empty_run_has_no_skip_section() {
        let summary = Summary::default();
        assert_eq!(
            summary.message(),
            "Processed 0 MP3 file(s): 0 renamed, 0 cover(s) resized."
        );
    }
}
