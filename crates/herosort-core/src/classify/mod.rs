/// Path classification — maps an asset path to the hero it belongs to.
///
/// Two independent rules:
/// - [`skill_from_path`] for `.../icon_skill_<id>_<n>.png` icons.
/// - [`skin_from_path`] for `.../hero_<id>_<name>/.../Skin<n>/<file>.<ext>`.
///
/// Both are pure and total: every input yields either a record or a
/// [`ClassifyError`], which the pipeline writes to an unknown-path report.
pub mod skill;
pub mod skin;

pub use skill::skill_from_path;
pub use skin::skin_from_path;

use std::num::ParseIntError;
use thiserror::Error;

/// Why a path was rejected. The `Display` text is what ends up in
/// `DeletedSkillPath.txt` / `DeletedSkinPath.txt`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("undefined path")]
    UndefinedPath,

    #[error("wrong format")]
    WrongFormat,

    #[error("invalid skill number: {0}")]
    InvalidSkillNumber(#[from] ParseIntError),

    #[error("wrong format: can't convert skin number, folder should be in form 'SkinX'")]
    InvalidSkinNumber,
}

/// Split a path on both `\` and `/`, so Windows-style and Unix-style
/// paths classify the same way.
pub(crate) fn components(path: &str) -> Vec<&str> {
    path.split(['\\', '/']).collect()
}
