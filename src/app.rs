mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;
mod mouse_scroll;

pub use app_state::{App, PromptField};
