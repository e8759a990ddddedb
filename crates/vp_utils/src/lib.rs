//! Small shared building blocks for the `vp_*` crates.
//!
//! - [`hash`]: `hashbrown` containers keyed by a fixed-seed `foldhash` state,
//!   so iteration order and hash values only depend on the inserted data.
//! - [`vec`]: the `fastvec` re-export, used where short sequences are
//!   collected before being frozen.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
pub mod vec;
