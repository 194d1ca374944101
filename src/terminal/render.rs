use crate::dictionary::{CanonicalField, Entry};
use crate::query::{FilterOptions, Page};
use std::fmt::Write;

const COLUMNS: [(CanonicalField, &str); 6] = [
    (CanonicalField::Term, "WORD"),
    (CanonicalField::Transcription, "TRANSCRIPTION"),
    (CanonicalField::Translation, "TRANSLATION"),
    (CanonicalField::Unit, "UNIT"),
    (CanonicalField::Topic, "TOPIC"),
    (CanonicalField::Grade, "GRADE"),
];

pub fn render_page(page: &Page<&Entry>) -> String {
    let mut out = String::new();
    let header: Vec<&str> = COLUMNS.iter().map(|(_, title)| *title).collect();
    let _ = writeln!(out, "  # | {}", header.join(" | "));

    if page.total == 0 {
        let _ = writeln!(out, "No results");
    }
    for (i, entry) in page.items.iter().enumerate() {
        let cells: Vec<&str> = COLUMNS
            .iter()
            .map(|(field, _)| entry.get(*field).unwrap_or(""))
            .collect();
        let _ = writeln!(out, "{:>3} | {}", i + 1, cells.join(" | "));
    }

    let _ = write!(out, "{}", footer(page));
    out
}

pub fn footer<T>(page: &Page<T>) -> String {
    let mut out = String::new();
    if page.has_prev() {
        out.push_str("« first ‹ prev | ");
    }
    let _ = write!(
        out,
        "Page {} / {} • {}-{} of {}",
        page.page, page.total_pages, page.start_index, page.end_index, page.total
    );
    if page.has_next() {
        out.push_str(" | next › last »");
    }
    out
}

pub fn render_options(options: &FilterOptions) -> String {
    [CanonicalField::Unit, CanonicalField::Topic, CanonicalField::Grade]
        .iter()
        .filter_map(|field| {
            options
                .for_field(*field)
                .map(|values| format!("{:<6} {}", format!("{field}:"), values.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::paginate;

    #[test]
    fn empty_page_says_no_results() {
        let filtered: Vec<&Entry> = Vec::new();
        let rendered = render_page(&paginate(&filtered, 1, 70));
        assert!(rendered.contains("No results"));
        assert!(rendered.ends_with("Page 1 / 1 • 1-0 of 0"));
    }

    #[test]
    fn absent_fields_render_blank() {
        let entry = Entry::new("cat", "кіт").with_field(CanonicalField::Unit, "1");
        let filtered = vec![&entry];
        let rendered = render_page(&paginate(&filtered, 1, 70));
        assert!(rendered.contains("  1 | cat |  | кіт | 1 |  | "));
        assert!(rendered.ends_with("Page 1 / 1 • 1-1 of 1"));
    }

    #[test]
    fn footer_hints_available_navigation() {
        let data: Vec<usize> = (1..=150).collect();
        assert_eq!(footer(&paginate(&data, 1, 70)), "Page 1 / 3 • 1-70 of 150 | next › last »");
        assert_eq!(
            footer(&paginate(&data, 2, 70)),
            "« first ‹ prev | Page 2 / 3 • 71-140 of 150 | next › last »"
        );
        assert_eq!(footer(&paginate(&data, 3, 70)), "« first ‹ prev | Page 3 / 3 • 141-150 of 150");
    }

    #[test]
    fn options_list_each_selectable_field() {
        let entries = vec![Entry::new("cat", "кіт").with_field(CanonicalField::Unit, "1")];
        let rendered = render_options(&FilterOptions::from_entries(&entries));
        assert_eq!(rendered, "unit:  All, 1\ntopic: All\ngrade: All");
    }
}
