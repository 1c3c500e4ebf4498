//! UI Components
//!
//! Pages and the shared widgets they are assembled from.

mod auth_forms;
mod bar_chart;
mod chain_dashboard;
mod drone_dashboard;
mod home;
mod inventory_dashboard;
mod investors;
mod kiosks_dashboard;
mod nav_bar;
mod pricing;
mod profile;
mod search_bar;
mod stat_card;
mod sustainability_dashboard;
mod toast_stack;
mod vans_dashboard;

pub use auth_forms::{LoginPage, RegisterPage};
pub use bar_chart::{BarChart, ValueFormat};
pub use chain_dashboard::ChainDashboard;
pub use drone_dashboard::DroneDashboard;
pub use home::HomePage;
pub use inventory_dashboard::InventoryDashboard;
pub use investors::InvestorsPage;
pub use kiosks_dashboard::KiosksDashboard;
pub use nav_bar::NavBar;
pub use pricing::PricingPage;
pub use profile::ProfilePage;
pub use search_bar::SearchBar;
pub use stat_card::StatCard;
pub use sustainability_dashboard::SustainabilityDashboard;
pub use toast_stack::ToastStack;
pub use vans_dashboard::VansDashboard;
