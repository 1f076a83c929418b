/// Output tree rebuild — copies classified assets into `hero/`.
///
/// ```text
/// hero/
///   <heroId>/
///     skill/
///       icon1.png
///       icon2.png
///     skin1/
///       Aurora.json
///       Aurora.atlas
///       Aurora.png
/// ```
///
/// The previous `hero/` tree is removed first so stale assets never
/// survive a run. Individual mkdir/copy failures are logged and counted;
/// they never abort the rebuild.
use crate::config::OutputLayout;
use crate::model::{SkillIndex, SkinIndex};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Tally of a rebuild.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: u64,
    pub failed: u64,
}

impl CopyStats {
    fn record(&mut self, src: &Path, dst: &Path, result: io::Result<()>) {
        match result {
            Ok(()) => self.copied += 1,
            Err(err) => {
                self.failed += 1;
                warn!("Failed to copy {} -> {}: {err}", src.display(), dst.display());
            }
        }
    }
}

/// Delete `hero/` and recreate it from both indexes.
pub fn rebuild(layout: &OutputLayout, skills: &SkillIndex, skins: &SkinIndex) -> CopyStats {
    clear_hero_root(layout);

    let mut stats = CopyStats::default();

    for (hero, hero_skills) in skills {
        let dir = layout.skill_dir(hero.as_str());
        for skill in hero_skills {
            let dst = layout.skill_icon(hero.as_str(), skill.number);
            stats.record(&skill.absolute_path, &dst, copy_into(&dir, &skill.absolute_path, &dst));
        }
    }

    for (hero, hero_skins) in skins {
        for skin in hero_skins {
            let dir = layout.skin_dir(hero.as_str(), skin.number);
            let dst = dir.join(skin.output_file_name());
            stats.record(&skin.absolute_path, &dst, copy_into(&dir, &skin.absolute_path, &dst));
        }
    }

    debug!("Copied {} files, {} failed", stats.copied, stats.failed);
    stats
}

fn clear_hero_root(layout: &OutputLayout) {
    let root = layout.hero_root();
    match fs::remove_dir_all(&root) {
        Ok(()) => debug!("Removed previous {}", root.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!("Failed to remove {}: {err}", root.display()),
    }
}

/// Ensure `dir` exists, then copy `src` to `dst`. The file handles are
/// closed by `fs::copy` on every path.
fn copy_into(dir: &Path, src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::copy(src, dst)?;
    Ok(())
}
