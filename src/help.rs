//! Key hints shown on the bottom row

pub mod help_line_render;
