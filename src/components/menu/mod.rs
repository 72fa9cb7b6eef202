//! The expandable menu belt and its content sections.

mod belt;
mod sections;

pub use belt::MenuBelt;
