//! UI Components
//!
//! Reusable Leptos components.

mod form_input;
mod layout;
mod line_chart;
mod nav_link;
mod pie_chart;
mod summary_card;
mod toast_container;
mod todo_panel;

pub use form_input::FormInput;
pub use layout::Layout;
pub use line_chart::LineChartView;
pub use nav_link::NavLink;
pub use pie_chart::PieChart;
pub use summary_card::SummaryCardView;
pub use toast_container::ToastContainer;
pub use todo_panel::TodoPanel;
