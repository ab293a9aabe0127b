//! Shared UI components

pub mod sidebar;
pub mod spinner;

pub use sidebar::Sidebar;
pub use spinner::LoadingSpinner;
