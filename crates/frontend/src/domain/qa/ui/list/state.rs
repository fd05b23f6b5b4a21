//! List view state and the filter → search → paginate derivation pipeline.
//!
//! `ListQuery` is mutated only through its transition methods; every change
//! that can shrink the filtered set resets to page 1, and `set_page` clamps,
//! so the page index is always inside `[1, max(1, ceil(filtered / size))]`.

use contracts::domain::qa::QaRecord;

use crate::shared::text::strip_tags;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub selected_category: Option<String>,
    pub search: String,
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            selected_category: None,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Change the category filter (`None` clears it). Resets to page 1.
    pub fn set_category(&mut self, category: Option<String>) {
        self.selected_category = category;
        self.page = 1;
    }

    /// Change the search term. Resets to page 1.
    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.page = 1;
    }

    /// Change the page size. Resets to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Jump to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// The underlying collection was replaced (fetch, logout). Resets to
    /// page 1.
    pub fn items_changed(&mut self) {
        self.page = 1;
    }
}

/// One derived page of the filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<QaRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    /// The clamped page index actually shown.
    pub page: usize,
    /// 1-based bounds for "Showing X–Y of Z"; both 0 when the page is empty.
    pub start: usize,
    pub end: usize,
}

/// Pure derivation: category filter, then search filter, then pagination.
/// Fetch order is preserved through both filters and the slice.
pub fn derive_page(all: &[QaRecord], query: &ListQuery) -> PageView {
    let needle = query.search.trim().to_lowercase();
    let filtered: Vec<&QaRecord> = all
        .iter()
        .filter(|r| matches_category(r, query.selected_category.as_deref()))
        .filter(|r| needle.is_empty() || matches_search(r, &needle))
        .collect();

    let total_count = filtered.len();
    let page_size = query.page_size.max(1);
    let total_pages = (total_count.div_ceil(page_size)).max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = total_count.min(start + page_size);
    let items: Vec<QaRecord> = filtered[start..end].iter().map(|r| (*r).clone()).collect();

    PageView {
        total_count,
        total_pages,
        page,
        start: if items.is_empty() { 0 } else { start + 1 },
        end,
        items,
    }
}

fn matches_category(record: &QaRecord, selected: Option<&str>) -> bool {
    match selected {
        Some(category) if !category.is_empty() => record.category == category,
        _ => true,
    }
}

/// Case-insensitive substring match over all text fields, with markup tags
/// stripped from the rich ones.
fn matches_search(record: &QaRecord, needle: &str) -> bool {
    let haystack = [
        record.question.clone(),
        strip_tags(&record.explanation),
        strip_tags(&record.usecase),
        strip_tags(&record.summary),
        record.example_code.clone(),
        record.output.clone(),
    ]
    .join(" ")
    .to_lowercase();
    haystack.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, question: &str) -> QaRecord {
        let mut r = QaRecord::draft();
        r.set_category(category);
        r.question = question.to_string();
        r
    }

    fn numbered(n: usize) -> Vec<QaRecord> {
        (1..=n).map(|i| record("Database", &format!("Q{}", i))).collect()
    }

    #[test]
    fn category_filter_is_idempotent() {
        let all = vec![
            record("Front-End", "A"),
            record("Back-End", "B"),
            record("Front-End", "C"),
        ];
        let mut q = ListQuery::default();
        q.set_category(Some("Front-End".to_string()));
        let once = derive_page(&all, &q);
        let twice = derive_page(&once.items, &q);
        assert_eq!(once.items, twice.items);
        assert_eq!(once.total_count, 2);
    }

    #[test]
    fn unset_filter_passes_everything() {
        let all = vec![record("Front-End", "A"), record("Back-End", "B")];
        let q = ListQuery::default();
        assert_eq!(derive_page(&all, &q).total_count, 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = vec![record("Back-End", "Java 8 Features"), record("Back-End", "Threads")];
        let mut q = ListQuery::default();

        q.set_search("java".to_string());
        assert_eq!(derive_page(&all, &q).total_count, 1);

        q.set_search("FEATURES".to_string());
        assert_eq!(derive_page(&all, &q).total_count, 1);

        q.set_search("  features  ".to_string());
        assert_eq!(derive_page(&all, &q).total_count, 1, "needle is trimmed");
    }

    #[test]
    fn search_sees_through_markup() {
        let mut r = record("Front-End", "Rendering");
        r.explanation = "<p>virtual <b>dom</b> diffing</p>".to_string();
        let all = vec![r];
        let mut q = ListQuery::default();

        q.set_search("dom diffing".to_string());
        assert_eq!(derive_page(&all, &q).total_count, 1);

        // tag names are delimiters, not searchable text
        q.set_search("<b>".to_string());
        assert_eq!(derive_page(&all, &q).total_count, 0);
    }

    #[test]
    fn twelve_records_page_size_five() {
        let all = numbered(12);
        let q = ListQuery::default();
        let page = derive_page(&all, &q);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].question, "Q1");
        assert_eq!(page.items[4].question, "Q5");
        assert_eq!((page.start, page.end), (1, 5));
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let all = numbered(12);
        let mut q = ListQuery::default();
        q.set_page(3, 3);
        q.set_page_size(10);
        assert_eq!(q.page, 1);
        let page = derive_page(&all, &q);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[9].question, "Q10");
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_index_always_clamped() {
        let all = numbered(12);
        let mut q = ListQuery::default();

        q.set_page(99, 3);
        assert_eq!(q.page, 3);
        q.set_page(0, 3);
        assert_eq!(q.page, 1);

        // stale page index survives until derivation, which clamps too
        q.page = 9;
        let page = derive_page(&all, &q);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn first_and_last_jumps_land_on_bounds() {
        let mut q = ListQuery::default();
        q.set_page(2, 3);
        q.set_page(1, 3);
        assert_eq!(q.page, 1);
        q.set_page(3, 3);
        assert_eq!(q.page, 3);
    }

    #[test]
    fn total_pages_never_below_one() {
        let q = ListQuery::default();
        let page = derive_page(&[], &q);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
        assert_eq!((page.start, page.end), (0, 0));
        assert!(page.items.is_empty());
    }

    #[test]
    fn filter_and_search_transitions_reset_page() {
        let mut q = ListQuery::default();
        q.set_page(2, 3);
        q.set_category(Some("Database".to_string()));
        assert_eq!(q.page, 1);

        q.set_page(2, 3);
        q.set_search("x".to_string());
        assert_eq!(q.page, 1);

        q.set_page(2, 3);
        q.items_changed();
        assert_eq!(q.page, 1);
    }

    #[test]
    fn fetch_order_is_preserved() {
        let all = vec![
            record("Database", "C"),
            record("Database", "A"),
            record("Database", "B"),
        ];
        let q = ListQuery::default();
        let page = derive_page(&all, &q);
        let questions: Vec<_> = page.items.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["C", "A", "B"]);
    }
}
