/// Skin asset rule.
///
/// A skin path must contain a `hero_<heroId>_<heroName>` directory and a
/// `Skin<n>` directory somewhere above the asset file, e.g.
/// `C:\data\hero_0001_Aurora\web_idle\Skin1\Aurora.json`.
use super::{components, ClassifyError};
use crate::model::{ExtensionType, HeroId, Skin};
use std::path::Path;

const HERO_PREFIX: &str = "hero_";
const SKIN_PREFIX: &str = "Skin";
/// Characters reserved for the extension marker when splitting the file
/// name. Together with the extension ordinal this yields the stem length.
const EXTENSION_MARKER_LEN: usize = 4;

/// Classify a skin asset path.
///
/// When several components match the hero or skin pattern, the one
/// closest to the file wins.
pub fn skin_from_path(path: impl AsRef<Path>) -> Result<(HeroId, Skin), ClassifyError> {
    let path = path.as_ref();
    let text = path.to_string_lossy();

    let parts = components(&text);
    let extension = ExtensionType::from_path(&text);
    if parts.len() < 3 || extension == ExtensionType::Undefined {
        return Err(ClassifyError::UndefinedPath);
    }

    let mut hero_component = None;
    let mut skin_component = None;
    for &component in &parts {
        if component.starts_with(HERO_PREFIX) && component.matches('_').count() == 2 {
            hero_component = Some(component);
        }
        if component.starts_with(SKIN_PREFIX) && component.len() > SKIN_PREFIX.len() {
            skin_component = Some(component);
        }
    }
    let (Some(hero_component), Some(skin_component)) = (hero_component, skin_component) else {
        return Err(ClassifyError::UndefinedPath);
    };

    // "hero_0001_Aurora" -> "0001"
    let hero_id = hero_component
        .split('_')
        .nth(1)
        .ok_or(ClassifyError::UndefinedPath)?;

    let digits = &skin_component[SKIN_PREFIX.len()..];
    if digits.starts_with('+') {
        return Err(ClassifyError::InvalidSkinNumber);
    }
    let number: u32 = digits
        .parse()
        .map_err(|_| ClassifyError::InvalidSkinNumber)?;

    let last = parts[parts.len() - 1];
    let (file_name, file_extension) =
        split_file_name(last, extension).ok_or(ClassifyError::WrongFormat)?;

    Ok((
        HeroId::new(hero_id),
        Skin {
            number,
            absolute_path: path.to_path_buf(),
            file_name: file_name.to_string(),
            file_extension: file_extension.to_string(),
        },
    ))
}

/// Split `Aurora.json` into `("Aurora", "json")`.
///
/// The stem is the component minus `ordinal + 4` trailing characters; the
/// extension is whatever follows the stem and one dot. For names with more
/// than one dot only the final extension is split off.
fn split_file_name(component: &str, extension: ExtensionType) -> Option<(&str, &str)> {
    let stem_len = component
        .len()
        .checked_sub(extension.ordinal() + EXTENSION_MARKER_LEN)?;
    let file_name = component.get(..stem_len)?;
    let file_extension = component.get(stem_len + 1..)?;
    Some((file_name, file_extension))
}
