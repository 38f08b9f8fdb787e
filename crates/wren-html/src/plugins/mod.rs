//! None of these are registered by default: the tokenizer neither validates
//! attributes nor decodes entities unless asked to.

/// Prints warnings to the terminal.
pub mod console;
/// Decodes character references in text and attribute values.
pub mod decoder;
/// Checks attributes against the element tables.
pub mod validator;

pub use console::ConsoleWarnings;
pub use decoder::EntityDecoder;
pub use validator::AttributeValidator;
