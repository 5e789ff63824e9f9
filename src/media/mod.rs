pub mod catalog;
pub mod item;
pub mod mime;
