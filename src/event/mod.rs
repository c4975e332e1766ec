//! Event selection and choice resolution

mod processor;
pub mod selector;


pub use processor::*;
pub use selector::*;
