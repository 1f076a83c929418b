/// Skill-name registry — display names for hero skills, loaded from CSV.
///
/// The CSV's first row is a header and is never data. Each following row
/// is `<heroId>_<skillNumber>,<name>[,...]`; rows with fewer than two
/// columns are skipped and later duplicates overwrite earlier ones.
/// Rows are split on plain commas: quotes are ordinary characters, and
/// invalid UTF-8 is replaced rather than rejected.
use crate::error::{Error, Result};
use crate::model::HeroId;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use tracing::debug;

/// Mapping `"<heroId>_<skillNumber>"` -> skill display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillNameTable {
    names: HashMap<String, String>,
}

/// Key under which a hero's skill is registered, e.g. `0001_2`.
pub fn skill_key(hero: &HeroId, number: u32) -> String {
    format!("{hero}_{number}")
}

impl SkillNameTable {
    /// Load the table from a CSV file. Any read failure is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| Error::Csv {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
        let table = Self::from_reader(file).map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} skill names from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse CSV text from any reader.
    pub fn from_reader<R: io::Read>(reader: R) -> csv::Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut names = HashMap::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            if let (Some(key), Some(name)) = (record.get(0), record.get(1)) {
                names.insert(
                    String::from_utf8_lossy(key).into_owned(),
                    String::from_utf8_lossy(name).into_owned(),
                );
            }
        }
        Ok(Self { names })
    }

    /// Name registered for the hero's skill, or `""` when absent.
    pub fn name(&self, hero: &HeroId, number: u32) -> &str {
        self.names
            .get(&skill_key(hero, number))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Raw lookup by `"<heroId>_<skillNumber>"` key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(text: &str) -> SkillNameTable {
        SkillNameTable::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_row_is_not_data() {
        let table = parse("0001_1,Header Looking Row\n0001_2,Flame Strike\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("0001_1"), None);
        assert_eq!(table.get("0001_2"), Some("Flame Strike"));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let table = parse("key,name,description\n0001_3,Frost Nova,Freezes enemies\n");
        assert_eq!(table.get("0001_3"), Some("Frost Nova"));
    }

    #[test]
    fn short_rows_are_skipped() {
        let table = parse("key,name\n0001_1\n\n0001_2,Flame Strike\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("0001_1"), None);
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let table = parse("key,name\n0001_1,Old\n0001_1,New\n");
        assert_eq!(table.get("0001_1"), Some("New"));
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let table = parse("key,name\r\n0001_1,Slash\r\n");
        assert_eq!(table.get("0001_1"), Some("Slash"));
    }

    /// A stray quote stays inside its own field and row.
    #[test]
    fn quotes_are_plain_characters() {
        let table = parse("key,name\n0001_1,\"Big Hit\n0001_2,Slash\n0001_3,Nova\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("0001_1"), Some("\"Big Hit"));
        assert_eq!(table.get("0001_2"), Some("Slash"));
        assert_eq!(table.get("0001_3"), Some("Nova"));
    }

    /// Non-UTF-8 names (e.g. Latin-1) are kept lossily instead of failing the load.
    #[test]
    fn invalid_utf8_name_is_replaced() {
        let table =
            SkillNameTable::from_reader(&b"key,name\n0001_1,\xC9p\xE9e\n0001_2,Slash\n"[..])
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("0001_1"), Some("\u{FFFD}p\u{FFFD}e"));
        assert_eq!(table.get("0001_2"), Some("Slash"));
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(parse("key,name\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn missing_names_read_as_empty() {
        let table = parse("key,name\n0001_1,Slash\n");
        let hero = HeroId::new("0001");
        assert_eq!(table.name(&hero, 1), "Slash");
        assert_eq!(table.name(&hero, 2), "");
    }

    #[test]
    fn skill_key_format() {
        assert_eq!(skill_key(&HeroId::new("0001"), 4), "0001_4");
    }

    /// Loading the same file twice yields identical tables.
    #[test]
    fn load_is_idempotent() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("skills.csv");
        fs::write(&path, "key,name\n0001_1,Slash\n0002_4,Roar\n").unwrap();

        let first = SkillNameTable::load(&path).unwrap();
        let second = SkillNameTable::load(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn missing_file_is_fatal() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let err = SkillNameTable::load(&tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, Error::Csv { .. }));
    }
}
