//! Data models for PassField
//!
//! Configuration structures describing what a field should render.

pub mod field;

pub use field::{
    FieldConfig, FieldSize, InputMode, HIDE_NATIVE_AFFORDANCES_CLASS, PASSWORD_FIELD_CLASSES,
};
