//! Find-in-text with match navigation
//!
//! Backs the editor's search bar: all case-insensitive, non-overlapping
//! occurrences of a query are collected up front, then stepped through with
//! wrap-around. Ranges are char offsets so they map onto editor cursors.

use log::debug;

/// A match as a half-open `(start, end)` char range
pub type MatchRange = (usize, usize);

/// Search state over one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    query: String,
    matches: Vec<MatchRange>,
    current: Option<usize>,
}

impl TextSearch {
    /// Create an empty search
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute matches of `query` in `text`
    ///
    /// The first match becomes current. An empty query clears the search.
    ///
    /// # Examples
    ///
    /// ```
    /// use spm_editor::TextSearch;
    ///
    /// let mut search = TextSearch::new();
    /// search.update("Mario and mario", "MARIO");
    /// assert_eq!(search.label(), "1 of 2");
    /// assert_eq!(search.next_match(), Some((10, 15)));
    /// assert_eq!(search.next_match(), Some((0, 5)));
    /// ```
    pub fn update(&mut self, text: &str, query: &str) {
        self.query = query.to_string();
        self.matches = find_all(text, query);
        self.current = if self.matches.is_empty() { None } else { Some(0) };
        debug!("Search for {query:?}: {} matches", self.matches.len());
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All matches in text order
    #[must_use]
    pub fn matches(&self) -> &[MatchRange] {
        &self.matches
    }

    /// Active match, if any
    #[must_use]
    pub fn current(&self) -> Option<MatchRange> {
        self.current.map(|index| self.matches[index])
    }

    /// Move to the next match, wrapping to the first
    pub fn next_match(&mut self) -> Option<MatchRange> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |index| (index + 1) % count));
        self.current()
    }

    /// Move to the previous match, wrapping to the last
    pub fn previous_match(&mut self) -> Option<MatchRange> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(count - 1, |index| (index + count - 1) % count));
        self.current()
    }

    /// Match counter for the search bar
    ///
    /// Empty for an empty query, `0 matches` when nothing matched, else
    /// `X of Y` with a 1-based position.
    #[must_use]
    pub fn label(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        match self.current {
            Some(index) => format!("{} of {}", index + 1, self.matches.len()),
            None => "0 matches".to_string(),
        }
    }
}

/// Case-insensitive containment check used for bubble lookup
#[must_use]
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    query.is_empty() || !find_all(text, query).is_empty()
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Non-overlapping case-insensitive matches of `query` in `text`
fn find_all(text: &str, query: &str) -> Vec<MatchRange> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack: Vec<char> = text.chars().map(fold).collect();

    let mut matches = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            matches.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_has_no_label() {
        let mut search = TextSearch::new();
        search.update("anything", "");
        assert_eq!(search.label(), "");
        assert!(search.matches().is_empty());
        assert_eq!(search.next_match(), None);
        assert_eq!(search.current(), None);
    }

    #[test]
    fn no_matches() {
        let mut search = TextSearch::new();
        search.update("Hello", "bye");
        assert_eq!(search.label(), "0 matches");
        assert_eq!(search.previous_match(), None);
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(find_all("aaaa", "aa"), [(0, 2), (2, 4)]);
        assert_eq!(find_all("aaa", "aa"), [(0, 2)]);
    }

    #[test]
    fn ranges_are_char_offsets() {
        assert_eq!(find_all("ÞÞ star ÞÞ", "Þ s"), [(1, 4)]);
        assert_eq!(find_all("Ärger ärger", "ÄRGER"), [(0, 5), (6, 11)]);
    }

    #[test]
    fn navigation_wraps() {
        let mut search = TextSearch::new();
        search.update("x.x.x", "X");
        assert_eq!(search.current(), Some((0, 1)));
        assert_eq!(search.label(), "1 of 3");

        assert_eq!(search.previous_match(), Some((4, 5)));
        assert_eq!(search.label(), "3 of 3");
        assert_eq!(search.next_match(), Some((0, 1)));
        assert_eq!(search.next_match(), Some((2, 3)));
        assert_eq!(search.label(), "2 of 3");
    }

    #[test]
    fn update_resets_position() {
        let mut search = TextSearch::new();
        search.update("ab ab ab", "ab");
        search.next_match();
        search.update("ab ab ab", "b");
        assert_eq!(search.query(), "b");
        assert_eq!(search.current(), Some((1, 2)));
    }

    #[test]
    fn containment() {
        assert!(contains_ignore_case("Hello Mario", "mARIO"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Hello", "Luigi"));
    }
}
