use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::{debug, trace};
use regex::Regex;

use crate::errors::AliasTableError;
use crate::inspector::code_point;

/// The alias data shipped with this crate, used when no alias file is configured.
const BUNDLED_ALIASES: &str = include_str!("../data/NameAliases.txt");

/// One `<code point>;<alias>;<type>` record whose alias is made of uppercase letters and spaces.
/// Aliases containing digits or punctuation (`VS1`, `SINGLE-SHIFT-2`) are not reported.
const RECORD_PATTERN: &str = r"(?m)^([0-9A-Fa-f]{4,6});([A-Z ]+);";

/// Formal name aliases in the `NameAliases.txt` format of the Unicode Character Database.
///
/// The raw text is kept as loaded and scanned on every query; the file is small and is only
/// consulted when a character has no name of its own. A table is never modified after it has been
/// built, so one instance can be shared by reference between any number of readers.
#[derive(Debug)]
pub struct AliasTable {
    raw: String,
    record: Regex,
}

impl AliasTable {
    /// Reads a whole alias file into memory.
    pub fn from_file(path: &Path) -> Result<Self, AliasTableError> {
        debug!("Loading name aliases from {}", path.display());
        let raw = fs::read_to_string(path)
            .map_err(|error| AliasTableError::IoError{path: path.to_path_buf(), error})?;
        return Self::from_raw(raw);
    }

    /// Builds a table over alias records that are already in memory.
    pub fn from_raw(raw: impl Into<String>) -> Result<Self, AliasTableError> {
        let raw = raw.into();
        let record = Regex::new(RECORD_PATTERN)?;
        trace!("Alias table holds {} bytes of raw records", raw.len());
        return Ok(Self{raw, record});
    }

    /// The alias data compiled into this binary.
    pub fn bundled() -> Result<Self, AliasTableError> {
        debug!("Using bundled name aliases");
        return Self::from_raw(BUNDLED_ALIASES);
    }

    /// All aliases recorded for `character`, in file order.
    pub fn aliases_for(&self, character: char) -> Vec<String> {
        let wanted = code_point(character, false);
        self.record
            .captures_iter(&self.raw)
            .filter(|record| record[1].eq_ignore_ascii_case(&wanted))
            .map(|record| record[2].to_string())
            .collect()
    }

    /// The aliases for `character` joined with `", "`, or an empty string if there are none.
    pub fn formatted_aliases(&self, character: char) -> String {
        self.aliases_for(character).iter().join(", ")
    }

    /// The first alias for `character`, or `"UNKNOWN"`.
    pub fn first_alias(&self, character: char) -> String {
        return match self.aliases_for(character).into_iter().next() {
            Some(alias) => alias,
            None => String::from("UNKNOWN"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
# comment line: 0041;NOT A RECORD;control
0000;NULL;control
0000;NUL;abbreviation
0009;CHARACTER TABULATION;control
0009;HORIZONTAL TABULATION;control
0009;HT;abbreviation
0009;TAB;abbreviation
008E;SINGLE SHIFT TWO;control
008E;SINGLE-SHIFT-2;control
fe00;VS1;abbreviation
1d0c5;BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA VASIS;correction
E0000;NOT PLAIN ZERO;control
";

    fn fixture() -> AliasTable {
        AliasTable::from_raw(FIXTURE).unwrap()
    }

    #[test]
    fn test_single_alias() {
        let table = AliasTable::from_raw("0007;ALERT;control\n").unwrap();
        assert_eq!(table.aliases_for('\u{7}'), vec!["ALERT"]);
    }

    #[test]
    fn test_aliases_in_file_order() {
        assert_eq!(
            fixture().aliases_for('\t'),
            vec!["CHARACTER TABULATION", "HORIZONTAL TABULATION", "HT", "TAB"]
        );
        assert_eq!(fixture().aliases_for('\0'), vec!["NULL", "NUL"]);
    }

    #[test]
    fn test_formatted_aliases() {
        assert_eq!(fixture().formatted_aliases('\0'), "NULL, NUL");
        assert_eq!(fixture().formatted_aliases('A'), "");
    }

    #[test]
    fn test_alias_must_be_letters_and_spaces() {
        assert_eq!(fixture().aliases_for('\u{8e}'), vec!["SINGLE SHIFT TWO"]);
        assert!(fixture().aliases_for('\u{fe00}').is_empty());
    }

    #[test]
    fn test_code_point_match_ignores_case() {
        assert_eq!(
            fixture().aliases_for('\u{1d0c5}'),
            vec!["BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA VASIS"]
        );
    }

    #[test]
    fn test_match_is_anchored_to_whole_field() {
        // U+0000 must not pick up the record for U+E0000, nor the commented-out U+0041.
        assert_eq!(fixture().aliases_for('\0'), vec!["NULL", "NUL"]);
        assert!(fixture().aliases_for('A').is_empty());
    }

    #[test]
    fn test_first_alias() {
        assert_eq!(fixture().first_alias('\t'), "CHARACTER TABULATION");
        assert_eq!(fixture().first_alias('A'), "UNKNOWN");
    }

    #[test]
    fn test_empty_table() {
        let table = AliasTable::from_raw("").unwrap();
        assert!(table.aliases_for('\0').is_empty());
        assert_eq!(table.first_alias('\0'), "UNKNOWN");
    }

    #[test]
    fn test_bundled_table() {
        let table = AliasTable::bundled().unwrap();
        assert_eq!(table.first_alias('\0'), "NULL");
        assert_eq!(table.first_alias('\n'), "LINE FEED");
        assert_eq!(table.first_alias('\u{85}'), "NEXT LINE");
        assert_eq!(table.aliases_for('\u{feff}'), vec!["BYTE ORDER MARK", "BOM", "ZWNBSP"]);
    }

    #[test]
    fn test_bundled_data_version() {
        let mut header = BUNDLED_ALIASES.lines();
        assert_eq!(header.next(), Some("# NameAliases-15.1.0.txt"));
        assert!(header.next().is_some_and(|line| line.starts_with("# Date: ")));
        assert!(BUNDLED_ALIASES.contains("ZWNBSP"));
    }

    #[test]
    fn test_missing_file() {
        let error = AliasTable::from_file(Path::new("/nonexistent/NameAliases.txt")).unwrap_err();
        assert!(matches!(error, AliasTableError::IoError{..}));
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AliasTable>();
    }
}
