//! Helper functions shared by the content loader, composer and manifest

mod date;
mod html;

pub use date::*;
pub use html::*;
