/// Hero skill table and the wrong-synchronized-data check.
///
/// For every hero that has at least one skill icon, skill numbers 1..=4
/// are cross-referenced against the skill-name registry. The icon set and
/// the named set should agree; every number where they do not is a
/// wrong-synchronized entry.
use crate::model::{HeroId, SkillIndex};
use crate::registry::SkillNameTable;
use std::collections::BTreeMap;

/// Every hero has exactly this many skill slots.
pub const SKILLS_PER_HERO: usize = 4;

/// Hero id -> skill names for slots 1..=4 (index 0 is skill 1).
///
/// A slot is `Some(name)` when the hero has an icon for it (the name may
/// be empty if the registry lacks it) and `None` when there is no icon.
/// Serialises as `{"0001":["Slash",null,...]}`.
pub type HeroSkillTable = BTreeMap<HeroId, [Option<String>; SKILLS_PER_HERO]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSkillReport {
    pub table: HeroSkillTable,
    /// One hero id per mismatching (hero, skill number) pair, so an id
    /// may repeat.
    pub wrong_synchronized: Vec<HeroId>,
}

pub fn build_hero_skills(skills: &SkillIndex, names: &SkillNameTable) -> HeroSkillReport {
    let mut report = HeroSkillReport::default();

    for hero in skills.heroes() {
        let mut slots: [Option<String>; SKILLS_PER_HERO] = Default::default();

        for (slot, number) in slots.iter_mut().zip(1u32..) {
            let has_icon = skills.has_skill(hero, number);
            let name = names.name(hero, number);

            // icon without name, or name without icon
            if has_icon == name.is_empty() {
                report.wrong_synchronized.push(hero.clone());
            }
            if has_icon {
                *slot = Some(name.to_string());
            }
        }

        report.table.insert(hero.clone(), slots);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeroSkill;
    use std::path::PathBuf;

    fn index(entries: &[(&str, u32)]) -> SkillIndex {
        let mut skills = SkillIndex::new();
        for &(hero, number) in entries {
            skills.insert(
                HeroId::new(hero),
                HeroSkill {
                    number,
                    absolute_path: PathBuf::from(format!("icon_skill_{hero}_{number}.png")),
                },
            );
        }
        skills
    }

    fn names(csv: &str) -> SkillNameTable {
        SkillNameTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn fully_synchronized_hero_has_no_mismatch() {
        let skills = index(&[("0001", 1), ("0001", 2), ("0001", 3), ("0001", 4)]);
        let table = names("key,name\n0001_1,A\n0001_2,B\n0001_3,C\n0001_4,D\n");

        let report = build_hero_skills(&skills, &table);
        assert!(report.wrong_synchronized.is_empty());
        assert_eq!(
            report.table[&HeroId::new("0001")],
            [
                Some("A".to_string()),
                Some("B".to_string()),
                Some("C".to_string()),
                Some("D".to_string())
            ]
        );
    }

    /// A name without an icon is a mismatch and the slot is null.
    #[test]
    fn name_without_icon_is_flagged() {
        let skills = index(&[("0001", 1)]);
        let table = names("key,name\n0001_1,Slash\n0001_2,Flame Strike\n");

        let report = build_hero_skills(&skills, &table);
        assert_eq!(report.wrong_synchronized, vec![HeroId::new("0001")]);
        assert_eq!(report.table[&HeroId::new("0001")][1], None);
    }

    /// An icon without a name is a mismatch; the slot holds an empty name.
    #[test]
    fn icon_without_name_is_flagged() {
        let skills = index(&[("0001", 1), ("0001", 2)]);
        let table = names("key,name\n0001_1,Slash\n");

        let report = build_hero_skills(&skills, &table);
        assert_eq!(report.wrong_synchronized, vec![HeroId::new("0001")]);
        assert_eq!(report.table[&HeroId::new("0001")][1], Some(String::new()));
    }

    /// Each mismatching slot adds one entry, so ids repeat.
    #[test]
    fn one_entry_per_mismatching_slot() {
        let skills = index(&[("0001", 1), ("0001", 2), ("0001", 3)]);
        let table = names("key,name\n0001_4,Ult\n");

        let report = build_hero_skills(&skills, &table);
        assert_eq!(report.wrong_synchronized.len(), 4);
        assert!(report
            .wrong_synchronized
            .iter()
            .all(|hero| hero.as_str() == "0001"));
    }

    /// Icons numbered above 4 do not occupy a slot.
    #[test]
    fn out_of_range_icons_are_ignored() {
        let skills = index(&[("0001", 5)]);
        let report = build_hero_skills(&skills, &names("key,name\n"));
        assert!(report.wrong_synchronized.is_empty());
        assert_eq!(report.table[&HeroId::new("0001")], [None, None, None, None]);
    }

    /// Heroes that only exist in the registry are not reported.
    #[test]
    fn registry_only_heroes_are_ignored() {
        let skills = index(&[("0001", 1)]);
        let table = names("key,name\n0001_1,Slash\n0002_1,Roar\n");

        let report = build_hero_skills(&skills, &table);
        assert!(report.wrong_synchronized.is_empty());
        assert!(!report.table.contains_key(&HeroId::new("0002")));
    }

    #[test]
    fn table_serialises_nulls() {
        let skills = index(&[("0001", 1), ("0001", 3)]);
        let table = names("key,name\n0001_1,Slash\n0001_3,Nova\n");

        let report = build_hero_skills(&skills, &table);
        let json = serde_json::to_string(&report.table).unwrap();
        assert_eq!(json, r#"{"0001":["Slash",null,"Nova",null]}"#);
    }
}
