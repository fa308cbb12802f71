pub mod dynamic;

pub use dynamic::*;
