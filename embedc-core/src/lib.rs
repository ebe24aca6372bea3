pub mod emit;
pub mod ident;

pub use emit::*;
pub use ident::*;
