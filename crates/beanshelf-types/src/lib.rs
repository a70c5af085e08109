pub mod bean;
pub mod identifier;
pub mod navigation;

pub use bean::*;
pub use identifier::*;
pub use navigation::*;
