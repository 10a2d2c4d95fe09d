//! Disallowed character scan over string columns.

use crate::{CellValue, Table};
use dqc_core::{ErrorKind, ErrorRecord, Schema, SpecialCharConfig};
use std::collections::BTreeSet;
use tracing::debug;

/// The set of characters a clean business text value must not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    denylist: BTreeSet<char>,
    flag_control: bool,
}

impl CharacterSet {
    pub fn new(denylist: &str, flag_control: bool) -> Self {
        Self {
            denylist: denylist.chars().collect(),
            flag_control,
        }
    }

    pub fn from_config(config: &SpecialCharConfig) -> Self {
        Self::new(&config.denylist, config.flag_control)
    }

    /// Returns true if `c` is denylisted, or is a control character while
    /// control characters are flagged.
    ///
    /// U+FFFD always counts: readers substitute it for undecodable bytes.
    pub fn is_special(&self, c: char) -> bool {
        c == char::REPLACEMENT_CHARACTER
            || self.denylist.contains(&c)
            || (self.flag_control && c.is_control())
    }

    /// Distinct special characters of `text`, in order of first appearance.
    pub fn specials_in(&self, text: &str) -> Vec<char> {
        let mut found = Vec::new();
        for c in text.chars().filter(|c| self.is_special(*c)) {
            if !found.contains(&c) {
                found.push(c);
            }
        }
        found
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::from_config(&SpecialCharConfig::default())
    }
}

/// Scans text cells of selected columns for special characters.
#[derive(Debug, Clone)]
pub struct SpecialCharChecker {
    columns: Vec<String>,
    charset: CharacterSet,
}

impl SpecialCharChecker {
    pub fn new(columns: Vec<String>, charset: CharacterSet) -> Self {
        Self { columns, charset }
    }

    /// Builds a checker from a configuration, scanning the schema's string
    /// columns when the configuration names none.
    pub fn from_schema(schema: &Schema, config: &SpecialCharConfig) -> Self {
        let columns = match &config.columns {
            Some(columns) => columns.clone(),
            None => schema.string_columns().map(|c| c.name.clone()).collect(),
        };
        Self::new(columns, CharacterSet::from_config(config))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Emits one [`ErrorKind::SpecialCharacter`] record per offending cell,
    /// ordered by row then by scanned column order. Null cells, whitespace-only
    /// text included, are not scanned.
    pub fn check(&self, table: &Table) -> Vec<ErrorRecord> {
        let present: Vec<(usize, &str)> = self
            .columns
            .iter()
            .filter_map(|name| table.column_index(name).map(|pos| (pos, name.as_str())))
            .collect();

        let mut errors = Vec::new();
        for (row_idx, row) in table.rows().enumerate() {
            for (position, name) in &present {
                let cell = row.get(*position).filter(|cell| !cell.is_null());
                let Some(CellValue::Text(text)) = cell else {
                    continue;
                };
                let specials = self.charset.specials_in(text);
                if specials.is_empty() {
                    continue;
                }
                let listed = specials
                    .iter()
                    .map(|c| format!("{c:?}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                errors.push(ErrorRecord::new(
                    row_idx,
                    *name,
                    ErrorKind::SpecialCharacter,
                    format!("contains special characters: {listed}"),
                ));
            }
        }

        debug!(
            columns = present.len(),
            findings = errors.len(),
            "Special character scan complete"
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqc_core::{ColumnBuilder, SchemaBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_set() {
        let charset = CharacterSet::default();
        assert!(charset.is_special(','));
        assert!(charset.is_special('`'));
        assert!(charset.is_special('\t'));
        assert!(charset.is_special('\0'));
        assert!(!charset.is_special('ö'));
        assert!(!charset.is_special('-'));
        assert!(!charset.is_special(' '));
    }

    #[test]
    fn test_control_flag_off() {
        let charset = CharacterSet::new("|", false);
        assert!(!charset.is_special('\n'));
        assert!(charset.is_special('|'));
    }

    #[test]
    fn test_specials_in_distinct() {
        let charset = CharacterSet::default();
        assert_eq!(charset.specials_in("a,b;c,d"), vec![',', ';']);
        assert!(charset.specials_in("plain text").is_empty());
    }

    #[test]
    fn test_one_record_per_cell() {
        let table = Table::from_strings(&["Name"], &[&["Jöhn\tDoe"], &["Jane, \"JD\" Doe"]]);
        let checker = SpecialCharChecker::new(vec!["Name".to_string()], CharacterSet::default());

        let errors = checker.check(&table);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row_index(), 0);
        assert_eq!(errors[0].detail(), r"contains special characters: '\t'");
        assert_eq!(errors[1].detail(), r#"contains special characters: ',', '"'"#);
    }

    #[test]
    fn test_tab_in_denylist_without_control_flag() {
        let table = Table::from_strings(&["Name"], &[&["Jöhn\tDoe"]]);
        let checker =
            SpecialCharChecker::new(vec!["Name".to_string()], CharacterSet::new("\t", false));
        assert_eq!(checker.check(&table).len(), 1);
    }

    #[test]
    fn test_default_columns_are_string_columns() {
        let schema = SchemaBuilder::new()
            .column(ColumnBuilder::integer("id").build())
            .column(ColumnBuilder::string("name").build())
            .column(ColumnBuilder::string("city").build())
            .build();

        let checker = SpecialCharChecker::from_schema(&schema, &SpecialCharConfig::default());
        assert_eq!(checker.columns(), ["name".to_string(), "city".to_string()]);

        let config = SpecialCharConfig::default().with_columns(vec!["id".to_string()]);
        let checker = SpecialCharChecker::from_schema(&schema, &config);
        assert_eq!(checker.columns(), ["id".to_string()]);
    }

    #[test]
    fn test_skips_absent_columns_and_nulls() {
        let table = Table::from_strings(&["name"], &[&[""], &["ok"]]);
        let checker = SpecialCharChecker::new(
            vec!["name".to_string(), "missing".to_string()],
            CharacterSet::default(),
        );
        assert!(checker.check(&table).is_empty());
    }

    #[test]
    fn test_whitespace_only_cells_are_null_and_not_scanned() {
        let table = Table::from_strings(&["Name"], &[&["\t"], &[" \r\n "], &["a\tb"]]);
        let checker = SpecialCharChecker::new(vec!["Name".to_string()], CharacterSet::default());

        let errors = checker.check(&table);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].row_index(), 2);
    }

    #[test]
    fn test_replacement_character_always_flagged() {
        let charset = CharacterSet::new("", false);
        assert!(charset.is_special(char::REPLACEMENT_CHARACTER));

        let table = Table::from_strings(&["Name"], &[&["J\u{FFFD}hn"]]);
        let checker = SpecialCharChecker::new(vec!["Name".to_string()], charset);
        let errors = checker.check(&table);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].detail(),
            format!(
                "contains special characters: {:?}",
                char::REPLACEMENT_CHARACTER
            )
        );
    }
}
