//! Enhanced table demo: a product table with search, sortable headers
//! and pagination.
//!
//! Controls:
//! - Tab: move focus (the search box captures typing when focused)
//! - Mouse: click headers to sort, page buttons to paginate
//! - Escape: quit

use std::fs::File;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tabledom::table::data_table;
use tabledom::{translate, Color, Element, EnhancedTable, FocusState, Style, TableConfig, Terminal};

fn main() -> std::io::Result<()> {
    if let Ok(file) = File::create("enhanced_table.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let mut root = ui();
    let mut table = EnhancedTable::init(&mut root, "products", TableConfig::default())
        .ok_or_else(|| std::io::Error::other("products table missing"))?;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::default();
    let mut input = tabledom::TextInputState::new();

    loop {
        let raw = term.poll(Some(Duration::from_millis(100)))?;

        for event in &raw {
            if let crossterm::event::Event::Key(key) = event {
                if key.code == crossterm::event::KeyCode::Esc {
                    return Ok(());
                }
            }
        }

        let events = translate(&raw, &root, term.layout(), &mut focus);
        let events = input.process_events(&events, &root);
        for event in &events {
            table.handle_event(&mut root, event);
        }

        input.apply(&mut root, &focus);
        term.render(&root)?;
    }
}

fn ui() -> Element {
    Element::col()
        .gap(1)
        .child(
            Element::text(" Products ").style(
                Style::new()
                    .bold()
                    .background(Color::oklch(0.35, 0.09, 250.0))
                    .foreground(Color::rgb(240, 240, 240)),
            ),
        )
        .child(data_table(
            "products",
            &["Name", "Category", "Price", "Stock", ""],
            &sample_rows(),
        ))
}

fn sample_rows() -> Vec<Vec<String>> {
    let categories = ["Audio", "Video", "Storage", "Input", "Network"];
    (1..=25)
        .map(|n| {
            vec![
                format!("Product {n:02}"),
                categories[n % categories.len()].to_string(),
                format!("${}.{:02}", 10 + n * 3, (n * 7) % 100),
                format!("{}", 100 - n * 2),
                String::new(),
            ]
        })
        .collect()
}
