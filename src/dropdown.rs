//! Button that toggles a fixed option list

mod dropdown_events;
pub mod dropdown_render;
mod dropdown_state;

pub use dropdown_state::LabeledDropdown;
