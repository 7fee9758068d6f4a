//! Phrase Selection
//!
//! Three fixed roast slots, each with a clean and an unfiltered list.
//! A selection is a uniform draw from the list for `(category, filtered)`;
//! nothing is remembered between draws, so repeats are allowed.

pub mod catalog;
pub mod random;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::errors::{Result, RoastError};

pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};

/// One of the fixed roast slots, numbered from 1 for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    One,
    Two,
    Three,
}

impl Category {
    /// Every slot, in display order.
    pub const ALL: [Category; 3] = [Category::One, Category::Two, Category::Three];

    /// Resolve a 1-based slot number.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            1 => Ok(Category::One),
            2 => Ok(Category::Two),
            3 => Ok(Category::Three),
            _ => Err(RoastError::InvalidCategory { index }),
        }
    }

    /// The 1-based slot number.
    pub fn index(self) -> usize {
        match self {
            Category::One => 1,
            Category::Two => 2,
            Category::Three => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::One => "Roast #1",
            Category::Two => "Roast #2",
            Category::Three => "Roast #3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<usize> for Category {
    type Error = RoastError;

    fn try_from(index: usize) -> Result<Self> {
        Category::from_index(index)
    }
}

static BUILTIN: LazyLock<PhraseTable> = LazyLock::new(PhraseTable::catalog);

/// Phrase lists keyed by `(category, filtered)`.
///
/// Every pair is present and every list is non-empty; both constructors
/// guarantee it, so lookups never miss.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: HashMap<(Category, bool), &'static [&'static str]>,
}

impl PhraseTable {
    /// The built-in roast catalog, built on first use.
    pub fn builtin() -> &'static PhraseTable {
        &BUILTIN
    }

    fn catalog() -> Self {
        use catalog::*;

        let entries = HashMap::from([
            ((Category::One, false), ROASTS_ONE),
            ((Category::One, true), ROASTS_ONE_CLEAN),
            ((Category::Two, false), ROASTS_TWO),
            ((Category::Two, true), ROASTS_TWO_CLEAN),
            ((Category::Three, false), ROASTS_THREE),
            ((Category::Three, true), ROASTS_THREE_CLEAN),
        ]);
        Self { entries }
    }

    /// Build a table from explicit lists, rejecting gaps and empty lists.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((Category, bool), &'static [&'static str])>,
    {
        let entries: HashMap<_, _> = entries.into_iter().collect();

        for category in Category::ALL {
            for filtered in [false, true] {
                match entries.get(&(category, filtered)) {
                    None => return Err(RoastError::MissingVariant { category, filtered }),
                    Some(list) if list.is_empty() => {
                        return Err(RoastError::EmptyCategory { category, filtered })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self { entries })
    }

    /// The ordered list for one slot and variant.
    pub fn phrases(&self, category: Category, filtered: bool) -> &'static [&'static str] {
        self.entries[&(category, filtered)]
    }

    pub fn contains(&self, category: Category, filtered: bool, text: &str) -> bool {
        self.phrases(category, filtered).contains(&text)
    }
}

/// A single draw and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub category: Category,
    pub filtered: bool,
    /// Position within the slot's list
    pub index: usize,
    pub text: &'static str,
}

/// Draws phrases from a table using an injectable random source.
pub struct PhraseSelector<'t, R> {
    table: &'t PhraseTable,
    source: R,
}

impl PhraseSelector<'static, ThreadRandom> {
    /// Built-in catalog with the thread-local generator.
    pub fn thread_random() -> Self {
        Self::new(PhraseTable::builtin(), ThreadRandom)
    }
}

impl PhraseSelector<'static, SeededRandom> {
    /// Built-in catalog with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PhraseTable::builtin(), SeededRandom::new(seed))
    }
}

impl<'t, R: RandomSource> PhraseSelector<'t, R> {
    pub fn new(table: &'t PhraseTable, source: R) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &'t PhraseTable {
        self.table
    }

    /// Draw one phrase and report its position.
    pub fn selection(&mut self, category: Category, filtered: bool) -> Selection {
        let phrases = self.table.phrases(category, filtered);
        let index = self.source.pick_index(phrases.len());
        tracing::debug!(category = category.index(), filtered, index, "Selected roast");
        Selection {
            category,
            filtered,
            index,
            text: phrases[index],
        }
    }

    pub fn select(&mut self, category: Category, filtered: bool) -> &'static str {
        self.selection(category, filtered).text
    }

    /// Select by raw 1-based slot number; out-of-range numbers are an error.
    pub fn select_index(&mut self, index: usize, filtered: bool) -> Result<&'static str> {
        let category = Category::from_index(index)?;
        Ok(self.select(category, filtered))
    }
}

/// Draw from the built-in catalog with the thread-local generator.
pub fn select(category: Category, filtered: bool) -> &'static str {
    PhraseSelector::thread_random().select(category, filtered)
}
