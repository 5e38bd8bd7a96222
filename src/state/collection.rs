/// The in-memory, reload-driven mirror of the store's image list
///
/// This is the owning state for everything the grid renders:
/// the full record list (in store order), the current search term,
/// and the current page. The visible subset is always derived
/// fresh from those three, never cached.

use super::data::ImageRecord;

/// Number of images shown per grid page
pub const PAGE_SIZE: usize = 15;

/// Case-insensitive substring match of `query` against `name`
///
/// The empty query matches every name. The query is used literally:
/// no trimming, no tokenization, no regex.
pub fn name_matches(query: &str, name: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Deterministic page slice `[(page-1)*size, page*size)` clamped to bounds
///
/// A page past the end yields the empty slice. No wraparound, no error.
pub fn page_slice<T>(view: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(view.len());
    let end = page.saturating_mul(page_size).min(view.len());
    &view[start..end]
}

/// Owned collection state: items, filter, and pagination cursor
#[derive(Debug)]
pub struct CollectionState {
    items: Vec<ImageRecord>,
    search_term: String,
    current_page: usize,
}

impl CollectionState {
    pub fn new() -> Self {
        CollectionState {
            items: Vec::new(),
            search_term: String::new(),
            current_page: 1,
        }
    }

    /// Replace the full item list after a reload
    ///
    /// Resets the page to 1 so we never render an out-of-range page.
    /// A failed reload must not call this; the previous items stay.
    pub fn replace_items(&mut self, items: Vec<ImageRecord>) {
        self.items = items;
        self.current_page = 1;
    }

    /// All loaded records, in store order
    pub fn items(&self) -> &[ImageRecord] {
        &self.items
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the search term and jump back to page 1
    ///
    /// Filtering only re-derives the view from already-loaded items;
    /// it never triggers a store fetch.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 1;
    }

    /// Records whose name matches the current search term, store order kept
    pub fn filtered(&self) -> Vec<&ImageRecord> {
        self.items
            .iter()
            .filter(|record| name_matches(&self.search_term, &record.name))
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages in the filtered view (at least 1, even when empty)
    pub fn page_count(&self) -> usize {
        let filtered = self.filtered().len();
        filtered.div_ceil(PAGE_SIZE).max(1)
    }

    /// The records of the current page of the filtered view
    pub fn visible_page(&self) -> Vec<&ImageRecord> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page, PAGE_SIZE).to_vec()
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.page_count() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> ImageRecord {
        ImageRecord {
            id,
            name: name.to_string(),
            url: format!("data:image/png;base64,img{}", id),
            upload_date: "2026-08-29T10:00:00.000Z".to_string(),
        }
    }

    fn records(count: usize) -> Vec<ImageRecord> {
        (1..=count as i64)
            .map(|id| record(id, &format!("photo_{:03}.png", id)))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        assert!(name_matches("dog", "Dog.png"));
        assert!(name_matches("DOG", "my-dog-photo.jpg"));
        assert!(!name_matches("cat", "Dog.png"));
        // empty query matches everything
        assert!(name_matches("", "anything.png"));
        assert!(name_matches("", ""));
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        // literal behavior: " " only matches names containing a space
        assert!(name_matches(" ", "my photo.png"));
        assert!(!name_matches(" ", "photo.png"));
    }

    #[test]
    fn test_search_scenario_from_store_order() {
        let mut state = CollectionState::new();
        state.replace_items(vec![record(1, "cat.png"), record(2, "Dog.png")]);

        state.set_search_term("dog".to_string());
        let hits = state.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        state.set_search_term(String::new());
        let all = state.filtered();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_pages_partition_the_list_exactly() {
        let items = records(38);
        let pages = (38usize).div_ceil(PAGE_SIZE);
        assert_eq!(pages, 3);

        let mut seen = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&items, page, PAGE_SIZE);
            assert!(!slice.is_empty());
            assert!(slice.len() <= PAGE_SIZE);
            seen.extend(slice.iter().map(|r| r.id));
        }
        assert_eq!(seen, (1..=38).collect::<Vec<i64>>());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items = records(20);
        assert!(page_slice(&items, 3, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 100, PAGE_SIZE).is_empty());
        let empty: Vec<ImageRecord> = Vec::new();
        assert!(page_slice(&empty, 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_twenty_records_split_fifteen_five() {
        let mut state = CollectionState::new();
        state.replace_items(records(20));

        let first = state.visible_page();
        assert_eq!(first.len(), 15);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[14].id, 15);

        state.next_page();
        let second = state.visible_page();
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].id, 16);
        assert_eq!(second[4].id, 20);

        // no page 3
        state.next_page();
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_search_change_resets_to_page_one() {
        let mut state = CollectionState::new();
        state.replace_items(records(20));
        state.next_page();
        assert_eq!(state.current_page(), 2);

        state.set_search_term("photo".to_string());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_reload_resets_to_page_one() {
        let mut state = CollectionState::new();
        state.replace_items(records(40));
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);

        state.replace_items(records(5));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_prev_page_clamps_at_one() {
        let mut state = CollectionState::new();
        state.replace_items(records(20));
        state.prev_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_filtering_preserves_store_order() {
        let mut state = CollectionState::new();
        state.replace_items(vec![
            record(3, "beach.png"),
            record(1, "breakfast.png"),
            record(2, "castle.png"),
        ]);
        state.set_search_term("b".to_string());
        let ids: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
