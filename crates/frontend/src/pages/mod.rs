//! Feature views

pub mod customer;
pub mod dashboard;
pub mod employees;
pub mod login;
pub mod orders;
pub mod services;

pub use customer::CustomerPage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use services::ServicesPage;
