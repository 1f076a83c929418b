/// Hero spine — maps `<heroId>_<skinNumber>` to the spine JSON file name
/// of that skin, for the downstream animation loader.
use crate::model::SkinIndex;
use std::collections::BTreeMap;

pub type HeroSpine = BTreeMap<String, String>;

/// Only skins whose extension is exactly `json` are spine files. If a
/// skin folder holds several, the last one walked wins.
pub fn build_hero_spine(skins: &SkinIndex) -> HeroSpine {
    let mut spine = HeroSpine::new();
    for (hero, hero_skins) in skins {
        for skin in hero_skins.iter().filter(|skin| skin.is_spine_json()) {
            spine.insert(format!("{hero}_{}", skin.number), skin.file_name.clone());
        }
    }
    spine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeroId, Skin};
    use std::path::PathBuf;

    fn skin(number: u32, name: &str, ext: &str) -> Skin {
        Skin {
            number,
            absolute_path: PathBuf::from(format!("{name}.{ext}")),
            file_name: name.to_string(),
            file_extension: ext.to_string(),
        }
    }

    #[test]
    fn only_json_skins_are_indexed() {
        let mut skins = SkinIndex::new();
        let hero = HeroId::new("0001");
        skins.insert(hero.clone(), skin(3, "Aurora", "json"));
        skins.insert(hero.clone(), skin(3, "Aurora", "atlas"));
        skins.insert(hero.clone(), skin(3, "Aurora", "png"));
        skins.insert(hero, skin(4, "AuroraWinter", "png"));

        let spine = build_hero_spine(&skins);
        assert_eq!(spine.len(), 1);
        assert_eq!(spine.get("0001_3").map(String::as_str), Some("Aurora"));
        assert!(!spine.contains_key("0001_4"));
    }

    #[test]
    fn later_json_in_same_skin_wins() {
        let mut skins = SkinIndex::new();
        let hero = HeroId::new("0001");
        skins.insert(hero.clone(), skin(1, "First", "json"));
        skins.insert(hero, skin(1, "Second", "json"));

        let spine = build_hero_spine(&skins);
        assert_eq!(spine.get("0001_1").map(String::as_str), Some("Second"));
    }

    #[test]
    fn keys_cover_every_hero() {
        let mut skins = SkinIndex::new();
        skins.insert(HeroId::new("0002"), skin(1, "B", "json"));
        skins.insert(HeroId::new("0001"), skin(2, "A", "json"));

        let spine = build_hero_spine(&skins);
        let keys: Vec<&String> = spine.keys().collect();
        assert_eq!(keys, vec!["0001_2", "0002_1"]);
    }
}
