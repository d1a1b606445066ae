//! Small shared helpers with no UI or network dependencies.

pub mod genome;
pub mod raf;
pub mod text;
