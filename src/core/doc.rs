// src/core/doc.rs
// Document model adapter over `scraper`. This is the only module that knows
// how the site's markup is shaped: extractors ask for "the nth table of a
// class" and "the text of cell n" and never touch selectors themselves.

use scraper::{ElementRef, Html, Selector};

/// A parsed page.
pub struct Document {
    html: Html,
}

/// A `<table>` located inside a [`Document`].
pub struct Table<'a> {
    element: ElementRef<'a>,
}

/// A `<tr>` inside a [`Table`].
pub struct Row<'a> {
    element: ElementRef<'a>,
}

// All selectors in this module are fixed strings, known valid.
fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

impl Document {
    pub fn parse(html: &str) -> Document {
        Document {
            html: Html::parse_document(html),
        }
    }

    /// The `n`th (zero-indexed) `<table>` with the given class, or None if
    /// the page has fewer of them.
    pub fn nth_table_of_class(&self, class: &str, n: usize) -> Option<Table<'_>> {
        let selector = sel(&format!("table.{class}"));
        self.html
            .select(&selector)
            .nth(n)
            .map(|element| Table { element })
    }

    /// The page `<title>` text, whitespace-collapsed.
    pub fn title_text(&self) -> Option<String> {
        self.html
            .select(&sel("title"))
            .next()
            .map(|e| collapse_ws(&e.text().collect::<String>()))
    }
}

impl<'a> Table<'a> {
    /// All rows of the table, in document order.
    pub fn rows(&self) -> Vec<Row<'a>> {
        self.element
            .select(&sel("tr"))
            .map(|element| Row { element })
            .collect()
    }

    /// All rows after the header row.
    pub fn rows_excluding_header(&self) -> Vec<Row<'a>> {
        self.element
            .select(&sel("tr"))
            .skip(1)
            .map(|element| Row { element })
            .collect()
    }

    /// Every link target inside the table, in document order. Anchors
    /// without an href are ignored.
    pub fn anchor_hrefs(&self) -> Vec<String> {
        self.element
            .select(&sel("a"))
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

impl Row<'_> {
    /// Markup-free text of the `n`th `<td>`, entity-decoded and
    /// whitespace-collapsed.
    pub fn cell_text(&self, n: usize) -> Option<String> {
        self.element.select(&sel("td")).nth(n).map(cell_to_text)
    }

    /// Texts of all `<td>`s in the row.
    pub fn cell_texts(&self) -> Vec<String> {
        self.element.select(&sel("td")).map(cell_to_text).collect()
    }
}

fn cell_to_text(cell: ElementRef<'_>) -> String {
    collapse_ws(&cell.text().collect::<String>())
}

/// Collapse whitespace runs into single spaces and trim.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
