use scraper::{ElementRef, Html, Node};

/// Every element of the document in document order.
pub(crate) fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
}

pub(crate) fn is_tag(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub(crate) fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All descendant text of `el`, whitespace-normalized. A `<br>` counts as a space.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        match node.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name() == "br" => out.push(' '),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// The nearest `<table>` strictly above `el`.
fn owning_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_tag(a, "table"))
}

/// Descendants of `table` named `tag` whose nearest enclosing table is `table`
/// itself, so rows of nested tables are never attributed to the outer one.
pub(crate) fn owned<'a>(table: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    table
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| is_tag(el, tag))
        .filter(|el| owning_table(*el).is_some_and(|t| t.id() == table.id()))
        .collect()
}

/// Whether `el` sits inside `container` (a `thead`, typically).
pub(crate) fn is_within(el: ElementRef<'_>, container: ElementRef<'_>) -> bool {
    el.ancestors().any(|a| a.id() == container.id())
}

/// Direct `td`/`th` children of a row, as trimmed text.
pub(crate) fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    cells_named(tr, &["td", "th"])
}

/// A row whose cells are all `th` (and which has at least one).
pub(crate) fn is_header_row(tr: ElementRef<'_>) -> bool {
    let cells = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|c| is_tag(c, "td") || is_tag(c, "th"))
        .collect::<Vec<_>>();
    !cells.is_empty() && cells.iter().all(|c| is_tag(c, "th"))
}

/// Direct children of a row whose tag is one of `names`, as trimmed text.
pub(crate) fn cells_named(tr: ElementRef<'_>, names: &[&str]) -> Vec<String> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| names.iter().any(|n| is_tag(c, n)))
        .map(text_of)
        .collect()
}
