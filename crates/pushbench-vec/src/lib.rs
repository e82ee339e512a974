//! A hand-written growable sequence for append benchmarks.
//!
//! [`GrowVec`] stores its elements in a boxed slice of slots and doubles
//! that slice whenever a push finds it full. It exists so the append
//! workload can be measured against a container whose growth policy is
//! fully visible, next to the standard `Vec`.
//!
//! The crate contains no `unsafe`: unused slots are `None` rather than
//! uninitialised memory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grow_vec;

pub use error::VecError;
pub use grow_vec::GrowVec;
