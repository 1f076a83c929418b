/// Hero records extracted from asset paths.
///
/// A `HeroSkill` or `Skin` is created once by the classifier and never
/// mutated afterwards; the indexes own them by value.
use compact_str::CompactString;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Identifier shared by every asset belonging to one hero, e.g. `"0001"`.
///
/// Ordered so the indexes iterate (and serialise) deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeroId(CompactString);

impl HeroId {
    pub fn new(id: &str) -> Self {
        Self(CompactString::new(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset kind, decided by the path suffix alone.
///
/// The discriminants are significant: the skin rule strips
/// `ordinal + 4` characters from the file name to find the stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExtensionType {
    Png = 0,
    Json = 1,
    Atlas = 2,
    Undefined = 3,
}

impl ExtensionType {
    /// Classify a path by suffix. `.json` is checked before `.atlas`
    /// and `.png`; anything else is `Undefined`.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".json") {
            Self::Json
        } else if path.ends_with(".atlas") {
            Self::Atlas
        } else if path.ends_with(".png") {
            Self::Png
        } else {
            Self::Undefined
        }
    }

    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// One skill icon belonging to a hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroSkill {
    /// `icon_skill_0001_2.png` -> 2.
    pub number: u32,
    /// Source path exactly as it was walked.
    pub absolute_path: PathBuf,
}

/// One skin asset (spine json, atlas or texture) belonging to a hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skin {
    /// Taken from the `SkinN` directory; names the `skinN/` output folder.
    pub number: u32,
    /// e.g. `C:\data\hero_0001_Aurora\web_idle\Skin1\Aurora.json`.
    pub absolute_path: PathBuf,
    /// File name without extension, e.g. `Aurora`.
    pub file_name: String,
    /// Extension without the dot, e.g. `json`.
    pub file_extension: String,
}

impl Skin {
    /// Name the asset is copied to inside its `skinN/` folder.
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.file_name, self.file_extension)
    }

    pub fn is_spine_json(&self) -> bool {
        self.file_extension == "json"
    }
}
