use crate::dictionary::{CanonicalField, Entry};
use crate::query::{filter, paginate, total_pages, FilterOptions, Page};
use crate::state::{FilterState, Selection, WorkingSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Search(String),
    Select(CanonicalField, Selection),
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    GoToPage(usize),
}

impl Event {
    fn changes_filter(&self) -> bool {
        matches!(self, Event::Search(_) | Event::Select(..))
    }
}

/// Working set plus the user's current filter state. Every view is
/// recomputed from scratch.
#[derive(Debug, Clone)]
pub struct Session {
    working_set: WorkingSet,
    options: FilterOptions,
    state: FilterState,
    page_size: usize,
}

impl Session {
    pub fn new(working_set: WorkingSet, page_size: usize) -> Self {
        let options = FilterOptions::from_entries(working_set.entries());
        Self {
            working_set,
            options,
            state: FilterState::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn entries(&self) -> &[Entry] {
        self.working_set.entries()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn apply(&mut self, event: Event) {
        let resets_page = event.changes_filter();
        match event {
            Event::Search(text) => self.state.search = text,
            Event::Select(CanonicalField::Unit, selection) => self.state.unit = selection,
            Event::Select(CanonicalField::Topic, selection) => self.state.topic = selection,
            Event::Select(CanonicalField::Grade, selection) => self.state.grade = selection,
            Event::Select(field, _) => debug!(%field, "field is not selectable"),
            Event::FirstPage => self.state.page = 1,
            Event::PrevPage => self.state.page = self.state.page.saturating_sub(1),
            Event::NextPage => self.state.page = self.state.page.saturating_add(1),
            Event::LastPage => self.state.page = self.total_pages(),
            Event::GoToPage(page) => self.state.page = page,
        }

        if resets_page {
            self.state.page = 1;
        } else {
            self.state.page = self.state.page.clamp(1, self.total_pages());
        }
    }

    pub fn filtered(&self) -> Vec<&Entry> {
        filter(self.entries(), &self.state)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn view(&self) -> Page<&Entry> {
        paginate(&self.filtered(), self.state.page, self.page_size)
    }

    /// Entry at 1-based `row` of the visible page.
    pub fn entry_on_page(&self, row: usize) -> Option<&Entry> {
        let index = row.checked_sub(1)?;
        self.view().items.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> WorkingSet {
        WorkingSet::Loaded(
            (1..=n)
                .map(|i| {
                    Entry::new(format!("word{i}"), format!("слово{i}"))
                        .with_field(CanonicalField::Unit, if i % 2 == 0 { "2" } else { "1" })
                })
                .collect(),
        )
    }

    #[test]
    fn page_controls_clamp_to_range() {
        let mut session = Session::new(numbered(150), 70);
        assert_eq!(session.total_pages(), 3);

        session.apply(Event::PrevPage);
        assert_eq!(session.state().page, 1);

        session.apply(Event::LastPage);
        assert_eq!(session.state().page, 3);
        session.apply(Event::NextPage);
        assert_eq!(session.state().page, 3);

        session.apply(Event::GoToPage(99));
        assert_eq!(session.state().page, 3);
        session.apply(Event::GoToPage(0));
        assert_eq!(session.state().page, 1);
    }

    #[test]
    fn filter_changes_reset_page() {
        let events = [
            Event::Search("word".into()),
            Event::Select(CanonicalField::Unit, Selection::Value("1".into())),
            Event::Select(CanonicalField::Topic, Selection::All),
            Event::Select(CanonicalField::Grade, Selection::All),
        ];
        for event in events {
            let mut session = Session::new(numbered(150), 70);
            session.apply(Event::GoToPage(2));
            assert_eq!(session.state().page, 2);
            session.apply(event);
            assert_eq!(session.state().page, 1);
        }
    }

    #[test]
    fn view_reflects_filters() {
        let mut session = Session::new(numbered(150), 70);
        session.apply(Event::Select(CanonicalField::Unit, Selection::Value("2".into())));
        let page = session.view();
        assert_eq!(page.total, 75);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].term, "word2");
        assert_eq!(session.options().units, vec!["All", "1", "2"]);
    }

    #[test]
    fn entry_on_page_is_one_based() {
        let mut session = Session::new(numbered(80), 70);
        session.apply(Event::NextPage);
        assert_eq!(session.entry_on_page(1).map(|e| e.term.as_str()), Some("word71"));
        assert!(session.entry_on_page(0).is_none());
        assert!(session.entry_on_page(11).is_none());
    }

    #[test]
    fn failed_load_shows_single_empty_page() {
        let session = Session::new(
            WorkingSet::Failed {
                reason: "missing".into(),
            },
            70,
        );
        let page = session.view();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(session.options().units, vec!["All"]);
    }
}
