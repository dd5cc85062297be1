pub mod list;
pub mod popups;
pub mod sidebar;
pub mod tree;
