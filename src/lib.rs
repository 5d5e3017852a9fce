//! # Char Sequences
//!
//! Two interchangeable implementations of a mutable ordered sequence of single
//! characters, both behind the [`AnySequence`] trait:
//!
//! * [`SequenceArray`]: contiguous storage in a `Vec<char>`.
//! * [`SequenceRing`]: a circular singly-linked list whose nodes live in an
//!   index-addressed arena. The tail always links back to the head.
//!
//! ## Key Features
//!
//! * **One contract:** the same operations, errors and edge cases on both
//!   representations, so callers can switch without changing behavior.
//! * **Checked arguments:** element arguments must be exactly one character and
//!   indices must be in range. Checks run before any mutation, so a failed call
//!   leaves the sequence as it was.
//! * **Deep copies:** `clone` and `extend_from` never share storage between
//!   sequences.
//!
//! ## Cargo features
//!
//! * `check-invariants`: after every mutation, `SequenceRing` verifies that the
//!   chain is closed and that every arena slot is either live or free.
//!
//! ## Examples
//!
//! ```rust
//! use char_sequences::{AnySequence, SequenceArray, SequenceRing};
//!
//! fn fill<S: AnySequence + Default>() -> S {
//!     let mut seq = S::default();
//!     for element in ["A", "B", "C"] {
//!         seq.append(element).unwrap();
//!     }
//!     seq.insert("Z", 1).unwrap();
//!     seq
//! }
//!
//! let arr: SequenceArray = fill();
//! let mut ring: SequenceRing = fill();
//! assert_eq!(arr.to_vec(), ring.to_vec());
//!
//! ring.reverse();
//! assert_eq!(ring.to_string(), "CBZA");
//! assert_eq!(ring.find_last("Z").unwrap(), Some(2));
//! assert!(ring.append("too long").is_err());
//! ```

// --- Module Declarations ---

pub mod error;
pub mod seqs;
pub mod sequence;
pub mod utils;

// --- Re-exports ---

pub use error::{Result, SequenceError};
pub use seqs::array::SequenceArray;
pub use seqs::ring::SequenceRing;
pub use sequence::{validate_element, AnySequence};
