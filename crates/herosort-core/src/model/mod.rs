/// Data model for HeroSort.
///
/// Re-exports the hero records and the per-hero indexes built during a run.
pub mod hero;
pub mod index;

pub use hero::{ExtensionType, HeroId, HeroSkill, Skin};
pub use index::{HeroIndex, SkillIndex, SkinIndex};
