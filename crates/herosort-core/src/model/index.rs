/// Per-hero indexes filled during classification.
///
/// Heroes are kept in a `BTreeMap` so every output derived from an index
/// (copy order, JSON keys, report lines) is deterministic. Within one hero
/// the records keep walk order.
use super::hero::{HeroId, HeroSkill, Skin};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Records grouped by hero id, in insertion order per hero.
#[derive(Debug, Clone)]
pub struct HeroIndex<T> {
    heroes: BTreeMap<HeroId, Vec<T>>,
}

pub type SkillIndex = HeroIndex<HeroSkill>;
pub type SkinIndex = HeroIndex<Skin>;

impl<T> Default for HeroIndex<T> {
    fn default() -> Self {
        Self {
            heroes: BTreeMap::new(),
        }
    }
}

impl<T> HeroIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the hero's sequence, creating it on first use.
    pub fn insert(&mut self, hero: HeroId, record: T) {
        self.heroes.entry(hero).or_default().push(record);
    }

    pub fn get(&self, hero: &HeroId) -> &[T] {
        self.heroes.get(hero).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> btree_map::Iter<'_, HeroId, Vec<T>> {
        self.heroes.iter()
    }

    pub fn heroes(&self) -> impl Iterator<Item = &HeroId> {
        self.heroes.keys()
    }

    /// Number of heroes (not records).
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Total number of records across all heroes.
    pub fn record_count(&self) -> usize {
        self.heroes.values().map(Vec::len).sum()
    }
}

impl<'a, T> IntoIterator for &'a HeroIndex<T> {
    type Item = (&'a HeroId, &'a Vec<T>);
    type IntoIter = btree_map::Iter<'a, HeroId, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl SkillIndex {
    /// Whether the hero has at least one icon with this skill number.
    pub fn has_skill(&self, hero: &HeroId, number: u32) -> bool {
        self.get(hero).iter().any(|skill| skill.number == number)
    }
}
