pub mod formatting;
pub mod path;
