//! In-memory search over scenario display names.
//!
//! The index answers the interactive filter box of a report viewer: every
//! scenario is added once when a report loads, then `search` runs on each
//! keystroke. A scenario matches when every query word is a case-insensitive
//! substring of some word of its name:
//!
//! - `failed` matches "a failed scenario" but not "a passed scenario"
//! - `passed scenario` matches "another passed scenario" (words may match
//!   different words of the name)
//!
//! Results are references to the stored records, deduplicated, in no
//! particular order — callers sort for display if they care.
//!
//! # Example
//!
//! ```
//! use cuke_search::{ScenarioSearch, Searchable};
//!
//! struct Named(&'static str);
//! impl Searchable for Named {
//!     fn display_name(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let mut index = ScenarioSearch::new();
//! index.add(Named("a passed scenario"));
//! index.add(Named("a failed scenario"));
//! assert_eq!(index.search("FAILED").len(), 1);
//! ```

#![warn(missing_docs)]

mod index;
mod token;

pub use index::{ScenarioSearch, Searchable};
pub use token::tokenize;
