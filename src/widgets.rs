pub mod option_list;
pub mod popup;
pub mod underline_field;
