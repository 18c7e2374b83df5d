pub mod app;
pub mod config;
pub mod dismiss;
pub mod dropdown;
pub mod error;
pub mod help;
pub mod layout;
pub mod options;
pub mod panel;
pub mod scroll;
pub mod suggest;
pub mod widgets;
