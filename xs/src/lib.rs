//! XrefStore - cross-reference index of named texts
//!
//! Keeps named texts in memory together with an inverted index from each
//! normalized word to the token positions where it occurs. Every mutation
//! rebuilds the index of the text it touches, so content and index never
//! drift apart.
//!
//! # Example
//!
//! ```
//! use xrefstore::XrefStore;
//!
//! let mut store = XrefStore::new();
//! store.build("a", "The cat sat on the Cat mat")?;
//! assert_eq!(store.search("a", "CAT")?, &[1, 5]);
//!
//! store.insert("a", 2, "big")?;
//! assert_eq!(store.reconstruct("a")?, "The cat big sat on the Cat mat");
//! # Ok::<(), xrefstore::XrefError>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
mod error;
pub mod export;
pub mod repl;
mod store;
pub mod tokenize;

pub use error::{Result, XrefError};
pub use store::{DEFAULT_TOP_WORDS, TextRecord, TextStats, XrefStore};
pub use tokenize::References;
