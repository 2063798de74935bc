//! Reusable behaviors and builders layered over the element tree.

mod activity;
mod counter;
mod filter_panel;
mod gallery;
mod skeleton;
mod tabs;

pub use activity::{ActivityEntry, ActivityFeed, ActivityKind};
pub use counter::Counter;
pub use filter_panel::FilterPanel;
pub use gallery::GalleryFilter;
pub use skeleton::{hide_skeleton, show_skeleton, SkeletonKind};
pub use tabs::{TabBar, TabBarState};
