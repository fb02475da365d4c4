// Rule engine for the GMCAII protocol: risk classification and
// treatment-pathway selection. Every function here is pure, total, and
// deterministic over the record snapshot it is given.
pub mod classify;
pub mod treatment;

pub use classify::*;
pub use treatment::*;
