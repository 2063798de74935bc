//! Dashboard demo: tabs, animated stat counters, an activity feed, a
//! gallery with category filters and a filter panel with chips.
//!
//! Controls:
//! - Mouse: switch tabs, filter the gallery, apply/reset filters
//! - a: push a new activity entry
//! - Escape: quit

use std::fs::File;
use std::time::Duration;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use tabledom::widgets::{
    ActivityEntry, ActivityFeed, ActivityKind, Counter, FilterPanel, GalleryFilter, TabBar,
};
use tabledom::{translate, Color, Element, FocusState, Style, Terminal};

fn main() -> std::io::Result<()> {
    if let Ok(file) = File::create("dashboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let (mut root, mut tabs) = TabBar::new("dash")
        .tab("Overview", overview_pane())
        .tab("Gallery", gallery_pane())
        .tab("Filters", filters_pane())
        .build();

    let gallery = GalleryFilter::init(&mut root, "gallery")
        .ok_or_else(|| std::io::Error::other("gallery missing"))?;
    let mut panel = FilterPanel::init(&mut root, "filters")
        .ok_or_else(|| std::io::Error::other("filter panel missing"))?;

    let mut feed = ActivityFeed::new("activity", seed_activities());
    feed.render(&mut root);

    let mut term = Terminal::new()?;
    let mut focus = FocusState::default();
    let mut input = tabledom::TextInputState::new();
    let mut pushed = 0u32;

    loop {
        let raw = term.poll(Some(Duration::from_millis(50)))?;

        for event in &raw {
            if let crossterm::event::Event::Key(key) = event {
                match key.code {
                    crossterm::event::KeyCode::Esc => return Ok(()),
                    crossterm::event::KeyCode::Char('a') if focus.focused().is_none() => {
                        pushed += 1;
                        feed.push(
                            &mut root,
                            ActivityEntry::new(
                                ActivityKind::Message,
                                format!("New message #{pushed}"),
                                "now",
                            ),
                        );
                    }
                    _ => {}
                }
            }
        }

        let events = translate(&raw, &root, term.layout(), &mut focus);
        let events = input.process_events(&events, &root);
        for event in &events {
            if tabs.handle_event(&mut root, event) {
                continue;
            }
            if gallery.handle_event(&mut root, event) {
                continue;
            }
            panel.handle_event(&mut root, event);
        }

        input.apply(&mut root, &focus);
        term.render(&root)?;
    }
}

fn overview_pane() -> Element {
    Element::col()
        .gap(1)
        .child(
            Element::row()
                .gap(4)
                .child(stat("Products", 128))
                .child(stat("Invoices", 57))
                .child(stat("Clients", 214)),
        )
        .child(Element::text("Recent activity").style(Style::new().bold()))
        .child(Element::col().id("activity").gap(0))
}

fn stat(label: &str, value: u64) -> Element {
    Element::col()
        .child(
            Counter::new(value)
                .style(Style::new().bold().foreground(Color::oklch(0.75, 0.12, 145.0)))
                .build(),
        )
        .child(Element::text(label).style(Style::new().dim()))
}

fn gallery_pane() -> Element {
    let categories = ["all", "photo", "chart", "diagram"];
    Element::col()
        .id("gallery")
        .gap(1)
        .child(
            Element::row().gap(2).children(categories.iter().map(|c| {
                let mut button = Element::text(*c).class("filter-btn").data("category", *c);
                if *c == "all" {
                    button = button.class("active");
                }
                button
            })),
        )
        .child(
            Element::row().gap(2).children((1..=9).map(|n| {
                let category = ["photo", "chart", "diagram"][n % 3];
                Element::text(format!("[{category} {n}]"))
                    .class("gallery-item")
                    .data("category", category)
            })),
        )
}

fn filters_pane() -> Element {
    Element::col()
        .id("filters")
        .gap(1)
        .child(
            Element::row()
                .child(Element::text("Name"))
                .child(Element::text_input("").data("filter-name", "name").width(16)),
        )
        .child(
            Element::row()
                .child(Element::text("City"))
                .child(Element::text_input("").data("filter-name", "city").width(16)),
        )
}

fn seed_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new(ActivityKind::Product, "Product 12 updated", "2m ago"),
        ActivityEntry::new(ActivityKind::Invoice, "Invoice #1042 paid", "10m ago"),
        ActivityEntry::new(ActivityKind::Client, "Client Acme added", "1h ago"),
        ActivityEntry::new(ActivityKind::System, "Nightly backup finished", "6h ago"),
    ]
}
