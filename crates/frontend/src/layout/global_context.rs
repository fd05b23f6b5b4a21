use std::collections::HashMap;

use contracts::domain::qa::QaRecord;
use leptos::prelude::*;

use crate::domain::qa::api::RecordStore;
use crate::domain::qa::ui::list::state::ListQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Dashboard,
    Qa,
}

/// Application-wide state, provided via context.
///
/// `items` and `counts` are two independently-failable slices fed by the
/// store; partial success (one fetch failing) is an accepted end state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<AppTab>,
    pub show_form: RwSignal<bool>,
    pub items: RwSignal<Vec<QaRecord>>,
    pub counts: RwSignal<HashMap<String, i64>>,
    pub loading_items: RwSignal<bool>,
    pub query: RwSignal<ListQuery>,
    /// Raised by a dashboard card click; the list view consumes it and
    /// scrolls itself into view.
    pub scroll_to_list: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(AppTab::Dashboard),
            show_form: RwSignal::new(true),
            items: RwSignal::new(Vec::new()),
            counts: RwSignal::new(HashMap::new()),
            loading_items: RwSignal::new(false),
            query: RwSignal::new(ListQuery::default()),
            scroll_to_list: RwSignal::new(false),
        }
    }

    /// Re-fetch the full collection. On failure the prior items stay
    /// (stale-but-present beats a blank screen) and a diagnostic is logged.
    pub async fn refresh_list(&self, store: &impl RecordStore) {
        self.loading_items.set(true);
        match store.list_all().await {
            Ok(list) => {
                self.items.set(list);
                self.query.update(|q| q.items_changed());
            }
            Err(e) => log::error!("failed to load items: {}", e),
        }
        self.loading_items.set(false);
    }

    /// Re-fetch the category counts. Failure is non-fatal and leaves the
    /// previous values.
    pub async fn refresh_counts(&self, store: &impl RecordStore) {
        match store.category_counts().await {
            Ok(counts) => self.counts.set(counts),
            Err(e) => log::error!("failed to load type counts: {}", e),
        }
    }

    /// Dashboard card click: filter by the category and jump to the list
    /// with the form hidden.
    pub fn open_category(&self, category: &str) {
        self.query.update(|q| q.set_category(Some(category.to_string())));
        self.active_tab.set(AppTab::Qa);
        self.show_form.set(false);
        self.scroll_to_list.set(true);
    }

    /// Consume a pending scroll request. Returns whether one was raised.
    pub fn take_scroll_request(&self) -> bool {
        let pending = self.scroll_to_list.get_untracked();
        if pending {
            self.scroll_to_list.set(false);
        }
        pending
    }

    pub fn count_for(&self, category: &str) -> i64 {
        self.counts
            .with(|c| c.get(category).copied().unwrap_or(0))
    }

    /// Client-side logout: clear the collection and the list view state
    /// and return to the dashboard. No server call; counts are eventually
    /// consistent and left as-is.
    pub fn logout(&self) {
        self.items.set(Vec::new());
        self.query.set(ListQuery::default());
        self.active_tab.set(AppTab::Dashboard);
        self.show_form.set(true);
        self.scroll_to_list.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::domain::qa::api::testing::MemoryStore;

    fn seeded_store() -> MemoryStore {
        let mut r = QaRecord::draft();
        r.question = "Q1".to_string();
        MemoryStore::seeded(vec![r])
    }

    #[test]
    fn refresh_list_replaces_items_and_resets_page() {
        let ctx = AppGlobalContext::new();
        ctx.query.update(|q| q.page = 3);

        block_on(ctx.refresh_list(&seeded_store()));
        assert_eq!(ctx.items.get_untracked().len(), 1);
        assert_eq!(ctx.query.get_untracked().page, 1);
        assert!(!ctx.loading_items.get_untracked());
    }

    #[test]
    fn failed_list_fetch_keeps_prior_items() {
        let ctx = AppGlobalContext::new();
        block_on(ctx.refresh_list(&seeded_store()));
        assert_eq!(ctx.items.get_untracked().len(), 1);

        let broken = MemoryStore::default();
        broken.fail_list.set(true);
        block_on(ctx.refresh_list(&broken));

        assert_eq!(ctx.items.get_untracked().len(), 1, "stale data preferred");
        assert!(!ctx.loading_items.get_untracked());
    }

    #[test]
    fn failed_counts_fetch_keeps_prior_counts() {
        let ctx = AppGlobalContext::new();
        block_on(ctx.refresh_counts(&seeded_store()));
        assert_eq!(ctx.count_for("Front-End"), 1);

        let broken = MemoryStore::default();
        broken.fail_counts.set(true);
        block_on(ctx.refresh_counts(&broken));
        assert_eq!(ctx.count_for("Front-End"), 1);
    }

    #[test]
    fn missing_count_defaults_to_zero() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.count_for("Cloud"), 0);
    }

    #[test]
    fn open_category_sets_filter_and_switches_tab() {
        let ctx = AppGlobalContext::new();
        ctx.query.update(|q| q.page = 2);

        ctx.open_category("Database");
        let q = ctx.query.get_untracked();
        assert_eq!(q.selected_category.as_deref(), Some("Database"));
        assert_eq!(q.page, 1);
        assert_eq!(ctx.active_tab.get_untracked(), AppTab::Qa);
        assert!(!ctx.show_form.get_untracked());
    }

    #[test]
    fn card_click_raises_one_scroll_request() {
        let ctx = AppGlobalContext::new();
        assert!(!ctx.take_scroll_request(), "nothing pending initially");

        ctx.open_category("Cloud");
        assert!(ctx.take_scroll_request());
        assert!(!ctx.take_scroll_request(), "request is consumed once");
    }

    #[test]
    fn logout_drops_pending_scroll_request() {
        let ctx = AppGlobalContext::new();
        ctx.open_category("Cloud");
        ctx.logout();
        assert!(!ctx.take_scroll_request());
    }

    #[test]
    fn logout_clears_collection_filter_and_view() {
        let ctx = AppGlobalContext::new();
        block_on(ctx.refresh_list(&seeded_store()));
        block_on(ctx.refresh_counts(&seeded_store()));
        ctx.open_category("Front-End");
        ctx.query.update(|q| q.set_search("java".to_string()));

        ctx.logout();
        assert!(ctx.items.get_untracked().is_empty());
        assert_eq!(ctx.query.get_untracked(), ListQuery::default());
        assert_eq!(ctx.active_tab.get_untracked(), AppTab::Dashboard);
        assert!(ctx.show_form.get_untracked());
        // counts untouched, they are refreshed on the next fetch
        assert_eq!(ctx.count_for("Front-End"), 1);
    }
}
