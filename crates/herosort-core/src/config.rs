/// Run configuration — input paths and the fixed output layout.
///
/// The CLI supplies the three input paths; every output name is fixed.
/// Outputs land in `OutputLayout::base`, which the binary sets to the
/// current working directory.
use std::path::{Path, PathBuf};

/// Root of the rebuilt per-hero tree, relative to the output base.
pub const HERO_DIR: &str = "hero";
/// Per-hero folder holding `icon<N>.png` files.
pub const SKILL_DIR: &str = "skill";
pub const DELETED_SKILL_REPORT: &str = "DeletedSkillPath.txt";
pub const DELETED_SKIN_REPORT: &str = "DeletedSkinPath.txt";
pub const HERO_SPINE_FILE: &str = "heroSpine.json";
pub const HERO_SKILL_FILE: &str = "heroSkill.json";
pub const WRONG_SYNC_REPORT: &str = "WrongSynchronizedData.txt";

/// Where every output of a run is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub base: PathBuf,
}

impl Default for OutputLayout {
    /// Outputs go to the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl OutputLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// `hero/`
    pub fn hero_root(&self) -> PathBuf {
        self.base.join(HERO_DIR)
    }

    /// `hero/<heroId>/skill/`
    pub fn skill_dir(&self, hero: &str) -> PathBuf {
        self.hero_root().join(hero).join(SKILL_DIR)
    }

    /// `hero/<heroId>/skill/icon<N>.png`
    pub fn skill_icon(&self, hero: &str, number: u32) -> PathBuf {
        self.skill_dir(hero).join(format!("icon{number}.png"))
    }

    /// `hero/<heroId>/skin<N>/`
    pub fn skin_dir(&self, hero: &str, number: u32) -> PathBuf {
        self.hero_root().join(hero).join(format!("skin{number}"))
    }

    pub fn deleted_skill_report(&self) -> PathBuf {
        self.base.join(DELETED_SKILL_REPORT)
    }

    pub fn deleted_skin_report(&self) -> PathBuf {
        self.base.join(DELETED_SKIN_REPORT)
    }

    pub fn hero_spine(&self) -> PathBuf {
        self.base.join(HERO_SPINE_FILE)
    }

    pub fn hero_skill(&self) -> PathBuf {
        self.base.join(HERO_SKILL_FILE)
    }

    pub fn wrong_sync_report(&self) -> PathBuf {
        self.base.join(WRONG_SYNC_REPORT)
    }
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Tree containing `icon_skill_<id>_<n>.png` files.
    pub skill_root: PathBuf,
    /// Tree containing `hero_<id>_<name>/.../Skin<n>/<file>` assets.
    pub skin_root: PathBuf,
    /// Skill-name registry.
    pub skill_csv: PathBuf,
    pub output: OutputLayout,
}

impl RunConfig {
    /// Config writing outputs to the current working directory.
    pub fn new(skill_root: &Path, skin_root: &Path, skill_csv: &Path) -> Self {
        Self {
            skill_root: skill_root.to_path_buf(),
            skin_root: skin_root.to_path_buf(),
            skill_csv: skill_csv.to_path_buf(),
            output: OutputLayout::default(),
        }
    }

    pub fn with_output(mut self, output: OutputLayout) -> Self {
        self.output = output;
        self
    }
}
