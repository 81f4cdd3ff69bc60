//! Status bar use cases

mod status_bar_widget;

pub use status_bar_widget::StatusBarWidget;
