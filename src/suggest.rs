//! Free-text input with a filterable suggestion panel

mod suggest_events;
pub mod suggest_render;
mod suggest_state;

pub use suggest_state::SuggestInput;
