//! UI components for the dashboard.

mod category_panel;
mod explorer_view;
mod header;
mod pages;
mod region_panel;

pub use category_panel::*;
pub use explorer_view::*;
pub use header::*;
pub use pages::*;
pub use region_panel::*;
