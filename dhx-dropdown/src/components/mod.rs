//! UI components for dhx-dropdown.

mod dropdown;

pub use dropdown::Dropdown;
