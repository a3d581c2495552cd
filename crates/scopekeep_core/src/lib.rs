//! # SCOPEKEEP Core
//!
//! Exclusively-owned, heap-backed buffers:
//! - One owner per allocation, never aliased
//! - Explicit O(1) ownership transfer that leaves the source empty
//! - Checked element access with recoverable out-of-range errors
//!
//! ## Example
//!
//! ```
//! use scopekeep_core::make_buffer;
//!
//! let mut b1 = make_buffer([1, 2, 3, 4, 5]);
//! b1[0] = 42;
//!
//! let b2 = b1.take();
//! assert_eq!(b2[0], 42);
//! assert_eq!(b1.len(), 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod error;

pub use buffer::{make_buffer, BufferSource, OwningBuffer, SharedBuffer};
pub use error::{BufferError, BufferResult};
