use crate::element::Element;
use crate::types::{Style, TextAlign};

/// Default column width in terminal cells when building table markup.
const COLUMN_WIDTH: u16 = 14;

/// Build a table element in the shape the enhancement layer expects:
/// a header row tagged `role=thead` and a body tagged `role=tbody`,
/// with one child per cell. This is the "server-rendered" starting
/// point a host document provides.
pub fn data_table<S: AsRef<str>>(id: &str, headers: &[&str], rows: &[Vec<S>]) -> Element {
    let head = Element::row()
        .id(format!("{id}_head"))
        .data("role", "thead")
        .children(
            headers
                .iter()
                .map(|h| header_cell(h)),
        );

    let body = Element::col().id(format!("{id}_body")).data("role", "tbody").children(
        rows.iter().map(|cells| table_row(cells)),
    );

    Element::col().id(id).child(head).child(body)
}

/// One body row with a cell element per value.
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> Element {
    Element::row().children(
        cells
            .iter()
            .map(|c| Element::text(c.as_ref()).width(COLUMN_WIDTH)),
    )
}

fn header_cell(text: &str) -> Element {
    Element::text(text)
        .width(COLUMN_WIDTH)
        .text_align(TextAlign::Left)
        .style(Style::new().bold())
}
