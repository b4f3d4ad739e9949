//! The edit plan records the insertions a command made so they can be written to disk.
//!
//! Edits are an ordered log: each edit's position refers to the document as the previous
//! edit on the same file left it. Applying a plan replays the log through a [`TextBuffer`]
//! and writes each file once.

use crate::buffer::{EditSurface, TextBuffer};
use crate::commands::EntryReport;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, io};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of file insertions, applied in order.
pub struct EditPlan {
    /// Individual insertions, in the order they were made.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One insertion into one file.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// Section label the insertion belongs to, for tracking and debugging.
    pub item_name: String,
    /// Insertion point, relative to the file after all earlier edits to it.
    pub at: Position,
    /// Literal text to insert.
    pub text: String,
}

impl EditPlan {
    #[must_use]
    /// Turns a command's report into edits against `file_name`.
    pub fn from_report(file_name: &str, report: &EntryReport) -> Self {
        let edits = report
            .insertions
            .iter()
            .map(|insertion| Edit {
                file_name: file_name.to_string(),
                item_name: report.section.clone(),
                at: insertion.at,
                text: insertion.text.clone(),
            })
            .collect();
        Self { edits }
    }

    /// Appends every edit of `other` after this plan's edits.
    pub fn extend(&mut self, other: Self) {
        self.edits.extend(other.edits);
    }

    #[must_use]
    /// Replays the edits for `file_name` on top of `content`.
    pub fn apply_to_text(&self, file_name: &str, content: &str) -> String {
        let mut buffer = TextBuffer::new(content);
        for edit in self.edits.iter().filter(|e| e.file_name == file_name) {
            buffer.replace_range(&edit.text, edit.at);
        }
        buffer.into_text()
    }

    /// Apply all edits in the plan to the files on disk.
    ///
    /// Groups edits by file, keeping their relative order, replays each group against the
    /// file's current content and writes the result back once per file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written.
    pub fn apply(&self) -> io::Result<()> {
        let mut file_order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for edit in &self.edits {
            let count = counts.entry(edit.file_name.as_str()).or_default();
            if *count == 0 {
                file_order.push(&edit.file_name);
            }
            *count += 1;
        }

        for file_name in file_order {
            let content = fs::read_to_string(file_name)?;
            let new_content = self.apply_to_text(file_name, &content);
            debug!(file_name, edits = counts[file_name], "applying edits");
            fs::write(file_name, new_content)?;
        }

        info!(edits = self.edits.len(), "edit plan applied");
        Ok(())
    }

    /// Reads a plan previously saved as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid plan.
    pub fn load(path: &std::path::Path) -> io::Result<Self> {
        let file_content = fs::read_to_string(path)?;
        serde_json::from_str(&file_content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Writes the plan as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save(&self, path: &std::path::Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
