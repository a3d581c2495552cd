//! # Owning Buffers
//!
//! Heap-backed storage with exactly one owner.
//!
//! ## Ownership Rules
//!
//! - A buffer is never duplicated: it has no `Clone`
//! - Ownership moves with `take` / `transfer_from`, leaving the source empty
//! - The allocation is released exactly once, on drop or on `release`

mod factory;
mod owning;
mod shared;

pub use factory::{make_buffer, BufferSource};
pub use owning::OwningBuffer;
pub use shared::SharedBuffer;
