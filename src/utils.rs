pub mod double_option;
pub mod timestamp;
