/// Skill icon rule.
///
/// A path is a skill icon when its last component looks like
/// `icon_skill_<heroId>_<skillNumber>.png`; the directories above it are
/// ignored.
use super::{components, ClassifyError};
use crate::model::{ExtensionType, HeroId, HeroSkill};
use std::path::Path;

const ICON_PREFIX: &str = "icon_skill_";
/// Length of the `.png` suffix.
const PNG_SUFFIX_LEN: usize = 4;

/// Classify a skill icon path.
///
/// ```
/// use herosort_core::classify::skill_from_path;
///
/// let (hero, skill) = skill_from_path(r"C:\skill\hero_0001\icon_skill_0001_2.png").unwrap();
/// assert_eq!(hero.as_str(), "0001");
/// assert_eq!(skill.number, 2);
/// ```
pub fn skill_from_path(path: impl AsRef<Path>) -> Result<(HeroId, HeroSkill), ClassifyError> {
    let path = path.as_ref();
    let text = path.to_string_lossy();

    let parts = components(&text);
    if parts.len() < 2 || ExtensionType::from_path(&text) != ExtensionType::Png {
        return Err(ClassifyError::UndefinedPath);
    }

    let last = parts[parts.len() - 1];
    if !last.starts_with(ICON_PREFIX) || last.matches('_').count() != 3 {
        return Err(ClassifyError::WrongFormat);
    }

    // "icon_skill_0001_2.png" -> "0001_2"
    let stem = last
        .len()
        .checked_sub(PNG_SUFFIX_LEN)
        .and_then(|end| last.get(ICON_PREFIX.len()..end))
        .ok_or(ClassifyError::WrongFormat)?;

    let (id, number) = stem.split_once('_').ok_or(ClassifyError::WrongFormat)?;
    if id.is_empty() || number.starts_with('+') {
        return Err(ClassifyError::WrongFormat);
    }
    let number: u32 = number.parse()?;

    Ok((
        HeroId::new(id),
        HeroSkill {
            number,
            absolute_path: path.to_path_buf(),
        },
    ))
}
