//! Pages
//!
//! One component per client-side route.

mod dashboard;
mod login;
mod not_found;
mod profile;
mod register;
mod resources;
mod table;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use resources::{ResourceDetailPage, ResourceListPage};
pub use table::TablePage;
