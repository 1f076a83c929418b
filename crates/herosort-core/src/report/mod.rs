/// Report generation — JSON lookup tables and plaintext anomaly lists.
///
/// - [`spine`] — `heroSpine.json`, skin number to spine file name.
/// - [`skills`] — `heroSkill.json` and the wrong-synchronized-data check.
///
/// Plaintext reports are newline-joined with no trailing newline and are
/// always written, even when empty. Write failures are fatal.
pub mod skills;
pub mod spine;

pub use skills::{build_hero_skills, HeroSkillReport, HeroSkillTable, SKILLS_PER_HERO};
pub use spine::{build_hero_spine, HeroSpine};

use crate::classify::ClassifyError;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A walked path that no classification rule accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPath {
    pub path: PathBuf,
    pub reason: ClassifyError,
}

impl fmt::Display for RejectedPath {
    /// `<path> (<reason>)`, one line of a `Deleted*Path.txt` report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.reason)
    }
}

/// Write `lines` joined by `\n`.
pub fn write_lines<T: fmt::Display>(path: &Path, lines: &[T]) -> Result<()> {
    let text = lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    write_file(path, text.as_bytes())
}

/// Serialise `value` as compact JSON and write it.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec(value)?;
    write_file(path, &data)
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
