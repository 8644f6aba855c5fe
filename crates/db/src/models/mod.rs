pub mod entry;
pub mod member;
