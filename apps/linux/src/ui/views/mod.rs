//! UI Views Module
//!
//! Complete screens for the PassField Linux app.

pub mod sign_in;

pub use sign_in::{SignInMessage, SignInView};
