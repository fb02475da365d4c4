// Domain model for the GMCAII pediatric AML stratification protocol
pub mod patient;
pub mod risk;
pub mod traits;

pub use patient::*;
pub use risk::*;
pub use traits::*;
