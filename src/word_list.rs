//! A collection of distinct words and how often each one was seen.

use std::{cmp::Ordering, collections::HashMap, fmt, io};

use crate::error::{Error, Result};

/// Words shorter than this are never recorded.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub count: usize,
}

/// Ascending by count, ties broken by ascending word.
pub fn canonical_order(a: &WordEntry, b: &WordEntry) -> Ordering {
    a.count.cmp(&b.count).then_with(|| a.word.cmp(&b.word))
}

/// Entries are kept in a vector so that callers control the order, with a
/// side index from word to position for lookups. The index is rebuilt after
/// every reordering.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    entries: Vec<WordEntry>,
    index: HashMap<String, usize>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    ///
    /// Words shorter than [`MIN_WORD_LEN`] are ignored. Matching is exact, so
    /// callers are expected to normalise case beforehand.
    pub fn insert_or_increment(&mut self, word: &str) -> Result<()> {
        if word.len() < MIN_WORD_LEN {
            return Ok(());
        }
        if let Some(&at) = self.index.get(word) {
            self.entries[at].count += 1;
            return Ok(());
        }

        let copy_word = || {
            let mut copy = String::new();
            copy.try_reserve_exact(word.len())
                .map_err(|_| Error::Allocation {
                    word: word.to_owned(),
                })?;
            copy.push_str(word);
            Ok::<_, Error>(copy)
        };
        let key = copy_word()?;
        let entry_word = copy_word()?;
        let alloc_failed = |_| Error::Allocation {
            word: word.to_owned(),
        };
        self.entries.try_reserve(1).map_err(alloc_failed)?;
        self.index.try_reserve(1).map_err(alloc_failed)?;

        self.index.insert(key, self.entries.len());
        self.entries.push(WordEntry {
            word: entry_word,
            count: 1,
        });
        Ok(())
    }

    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&at| &self.entries[at])
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&WordEntry, &WordEntry) -> Ordering,
    {
        self.entries.sort_by(compare);
        self.reindex();
    }

    pub fn sort(&mut self) {
        self.sort_by(canonical_order)
    }

    /// Write one `<count>\t<word>` line per entry, in current order.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.entries
            .iter()
            .try_for_each(|entry| writeln!(out, "{}\t{}", entry.count, entry.word))
    }

    fn reindex(&mut self) {
        for (at, entry) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(&entry.word) {
                *slot = at;
            }
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries
            .iter()
            .try_for_each(|entry| writeln!(f, "{}\t{}", entry.count, entry.word))
    }
}
