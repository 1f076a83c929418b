/// End-to-end run: walk, classify, rebuild `hero/`, write reports.
///
/// Three phases, each logged on entry and on completion:
/// 1. Refactoring directory — walk both trees, classify every path,
///    rebuild the output tree, write the unknown-path reports.
/// 2. Generating hero spine — `heroSpine.json`.
/// 3. Generating hero skill — load the CSV, write `heroSkill.json` and
///    `WrongSynchronizedData.txt`.
///
/// Fatal errors stop the run where they occur; outputs of earlier phases
/// stay on disk.
use crate::classify::{skill_from_path, skin_from_path, ClassifyError};
use crate::config::RunConfig;
use crate::error::Result;
use crate::layout;
use crate::model::{HeroId, HeroIndex, SkillIndex, SkinIndex};
use crate::registry::SkillNameTable;
use crate::report::{self, build_hero_skills, build_hero_spine, RejectedPath};
use crate::scanner::collect_files;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters for one completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub skill_paths: usize,
    pub skin_paths: usize,
    pub skills_classified: usize,
    pub skins_classified: usize,
    pub rejected_skill_paths: usize,
    pub rejected_skin_paths: usize,
    pub files_copied: u64,
    pub copy_failures: u64,
    pub spine_entries: usize,
    pub heroes_with_skills: usize,
    pub wrong_synchronized: usize,
    pub duration: Duration,
}

/// Paths sorted into a per-hero index plus the ones no rule accepted.
struct Classified<T> {
    index: HeroIndex<T>,
    rejected: Vec<RejectedPath>,
}

fn classify_all<T>(
    paths: Vec<PathBuf>,
    rule: impl Fn(&Path) -> std::result::Result<(HeroId, T), ClassifyError>,
) -> Classified<T> {
    let mut index = HeroIndex::new();
    let mut rejected = Vec::new();
    for path in paths {
        match rule(&path) {
            Ok((hero, record)) => index.insert(hero, record),
            Err(reason) => {
                debug!("Rejected {} ({reason})", path.display());
                rejected.push(RejectedPath { path, reason });
            }
        }
    }
    Classified { index, rejected }
}

/// Run every phase against `config`.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let output = &config.output;
    let mut summary = RunSummary::default();

    // ── Refactoring directory ───────────────────────────────────────────
    info!("Refactoring directory...");

    let skill_paths = collect_files(&config.skill_root)?;
    let skin_paths = collect_files(&config.skin_root)?;
    summary.skill_paths = skill_paths.len();
    summary.skin_paths = skin_paths.len();

    let skills: Classified<_> = classify_all(skill_paths, |path| skill_from_path(path));
    let skins: Classified<_> = classify_all(skin_paths, |path| skin_from_path(path));
    let skill_index: &SkillIndex = &skills.index;
    let skin_index: &SkinIndex = &skins.index;
    summary.skills_classified = skill_index.record_count();
    summary.skins_classified = skin_index.record_count();
    summary.rejected_skill_paths = skills.rejected.len();
    summary.rejected_skin_paths = skins.rejected.len();

    let stats = layout::rebuild(output, skill_index, skin_index);
    summary.files_copied = stats.copied;
    summary.copy_failures = stats.failed;

    report::write_lines(&output.deleted_skill_report(), &skills.rejected)?;
    report::write_lines(&output.deleted_skin_report(), &skins.rejected)?;

    info!("Refactoring directory... OK!");

    // ── Generating hero spine ───────────────────────────────────────────
    info!("Generating hero spine...");

    let spine = build_hero_spine(skin_index);
    report::write_json(&output.hero_spine(), &spine)?;
    summary.spine_entries = spine.len();

    info!("Generating hero spine... OK!");

    // ── Generating hero skill ───────────────────────────────────────────
    info!("Generating hero skill and check wrong synchronized data...");

    let names = SkillNameTable::load(&config.skill_csv)?;
    let hero_skills = build_hero_skills(skill_index, &names);
    report::write_json(&output.hero_skill(), &hero_skills.table)?;
    report::write_lines(&output.wrong_sync_report(), &hero_skills.wrong_synchronized)?;
    summary.heroes_with_skills = hero_skills.table.len();
    summary.wrong_synchronized = hero_skills.wrong_synchronized.len();

    info!("Generating hero skill and check wrong synchronized data... OK!");

    summary.duration = start.elapsed();
    info!(
        "Done in {:.2?}: {} skills, {} skins, {} rejected, {} copied ({} failed), {} out of sync",
        summary.duration,
        summary.skills_classified,
        summary.skins_classified,
        summary.rejected_skill_paths + summary.rejected_skin_paths,
        summary.files_copied,
        summary.copy_failures,
        summary.wrong_synchronized,
    );

    Ok(summary)
}
