//! Terminal presentation: theme, layout, and the widget set.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
