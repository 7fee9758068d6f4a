//! roastgen - fictional, light-hearted roasts on demand
//!
//! Three fixed roast slots, each with a clean and an unfiltered phrase list.
//! Every draw is an independent uniform pick; the random source is
//! injectable so callers and tests can pin the outcome.
//!
//! # Quick Start
//!
//! ```
//! use roastgen::phrases::{self, Category, PhraseTable};
//!
//! let roast = phrases::select(Category::One, true);
//! assert!(PhraseTable::builtin().contains(Category::One, true, roast));
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod phrases;
pub mod telemetry;

pub use errors::{Result, RoastError};
pub use phrases::{select, Category, PhraseSelector, PhraseTable, RandomSource, Selection};
