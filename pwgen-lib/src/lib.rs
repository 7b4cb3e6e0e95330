pub mod charset;
pub mod generator;
pub mod policy;
pub mod random;

pub use zeroize;
