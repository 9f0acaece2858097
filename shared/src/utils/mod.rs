//! Utility modules for PassField

pub mod class_list;

pub use class_list::{merge_classes, ClassList};
