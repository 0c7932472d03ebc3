/*
[INPUT]:  Log entries, optimistic command echoes, search queries
[OUTPUT]: Ordered display rows (newest first) with per-row visibility
[POS]:    Session core - log table model
[UPDATE]: When changing row styling or filter semantics
*/

use std::collections::VecDeque;

use logtail_adapter::{LogEntry, Severity};

/// Default cap on retained rows.
pub const DEFAULT_MAX_ROWS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Critical entries
    Danger,
    Warning,
    Default,
    /// Echo of a command the user just submitted
    Active,
}

impl From<Severity> for RowStyle {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => RowStyle::Danger,
            Severity::Warning => RowStyle::Warning,
            Severity::Normal => RowStyle::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// `None` for optimistic command echoes.
    pub id: Option<i64>,
    pub date: String,
    pub message: String,
    pub style: RowStyle,
    pub visible: bool,
}

impl LogRow {
    pub fn from_entry(entry: &LogEntry) -> Self {
        Self {
            id: Some(entry.id),
            date: entry.date.clone(),
            message: entry.message.clone(),
            style: entry.kind.into(),
            visible: true,
        }
    }

    pub fn echo(cmd: &str) -> Self {
        Self {
            id: None,
            date: String::new(),
            message: cmd.to_string(),
            style: RowStyle::Active,
            visible: true,
        }
    }

    /// Text the filter runs against: the cells concatenated as rendered.
    pub fn text(&self) -> String {
        format!("{}{}", self.date, self.message)
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.text().to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone)]
pub struct LogTable {
    rows: VecDeque<LogRow>,
    loading: bool,
    max_rows: usize,
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS)
    }
}

impl LogTable {
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            loading: false,
            max_rows: max_rows.max(1),
        }
    }

    /// Remove every row, including the loading placeholder.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.loading = false;
    }

    /// Replace the content with a loading placeholder.
    pub fn show_loading(&mut self) {
        self.rows.clear();
        self.loading = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Insert a row at the top; the oldest row is dropped past the cap.
    pub fn prepend(&mut self, row: LogRow) {
        self.rows.push_front(row);
        while self.rows.len() > self.max_rows {
            self.rows.pop_back();
        }
    }

    /// Recompute visibility of every row for a case-insensitive substring query.
    pub fn apply_filter(&mut self, query: &str) {
        let needle = query.to_lowercase();
        for row in self.rows.iter_mut() {
            row.visible = row.matches(&needle);
        }
    }

    /// All rows, newest first.
    pub fn rows(&self) -> impl Iterator<Item = &LogRow> {
        self.rows.iter()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &LogRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, message: &str, kind: Severity) -> LogEntry {
        LogEntry {
            id,
            date: "16/10/2026 09:30:00".to_string(),
            message: message.to_string(),
            kind,
        }
    }

    fn table_with(messages: &[&str]) -> LogTable {
        let mut table = LogTable::default();
        for (idx, message) in messages.iter().enumerate() {
            table.prepend(LogRow::from_entry(&entry(idx as i64, message, Severity::Normal)));
        }
        table
    }

    #[test]
    fn rows_are_newest_first() {
        let table = table_with(&["first", "second", "third"]);
        let messages: Vec<_> = table.rows().map(|row| row.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[test]
    fn severity_maps_to_style() {
        assert_eq!(RowStyle::from(Severity::Critical), RowStyle::Danger);
        assert_eq!(RowStyle::from(Severity::Warning), RowStyle::Warning);
        assert_eq!(RowStyle::from(Severity::Normal), RowStyle::Default);
        assert_eq!(LogRow::echo("x").style, RowStyle::Active);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut table = table_with(&["Boiler ON", "window open", "boiler off"]);
        table.apply_filter("BOILER");
        let visible: Vec<_> = table.visible_rows().map(|row| row.message.as_str()).collect();
        assert_eq!(visible, vec!["boiler off", "Boiler ON"]);
    }

    #[test]
    fn filter_matches_date_column_too() {
        let mut table = table_with(&["a", "b"]);
        table.apply_filter("16/10/2026");
        assert_eq!(table.visible_count(), 2);
        table.apply_filter("17/10");
        assert_eq!(table.visible_count(), 0);
    }

    #[test]
    fn empty_filter_shows_everything() {
        let mut table = table_with(&["a", "b", "c"]);
        table.apply_filter("zzz");
        assert_eq!(table.visible_count(), 0);
        table.apply_filter("");
        assert_eq!(table.visible_count(), 3);
    }

    #[test]
    fn filter_hides_exactly_non_matching_rows() {
        let messages = ["alpha", "ALPHABET", "beta", "gamma", "Alphorn"];
        for query in ["", "a", "alp", "ALPHA", "et", "x", "mm"] {
            let mut table = table_with(&messages);
            table.apply_filter(query);
            let needle = query.to_lowercase();
            for row in table.rows() {
                let expected = row.text().to_lowercase().contains(&needle);
                assert_eq!(row.visible, expected, "query {query:?} row {:?}", row.message);
            }
        }
    }

    #[test]
    fn loading_placeholder_is_dropped_by_clear() {
        let mut table = table_with(&["a"]);
        table.show_loading();
        assert!(table.is_loading());
        assert!(table.is_empty());
        table.clear();
        assert!(!table.is_loading());
    }

    #[test]
    fn cap_drops_oldest_rows() {
        let mut table = LogTable::new(2);
        for id in 0..5 {
            table.prepend(LogRow::from_entry(&entry(id, "m", Severity::Normal)));
        }
        let ids: Vec<_> = table.rows().map(|row| row.id).collect();
        assert_eq!(ids, vec![Some(4), Some(3)]);
    }
}
