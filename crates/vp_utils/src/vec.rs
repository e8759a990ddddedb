//! Re-exports [`fastvec`]'s stack-first vector.
//!
//! It's a vector crate tuned for small data sizes, which is exactly
//! what path segments are.

pub use fastvec::FastVec;
