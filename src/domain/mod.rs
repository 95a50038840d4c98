//! Core domain types for Terra

mod category;
mod classification;

pub use category::Category;
pub use classification::{Classification, Interpretation};
