//! The two counting modes and the state they accumulate across inputs.

use std::io::{self, Read, Write};

use crate::{
    error::{Error, Result},
    lexer::Tokenizer,
    utils::peeking_take_while::PeekingTakeWhileExt,
    word_list::{WordList, MIN_WORD_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Total number of words across all inputs
    #[default]
    Count,
    /// Occurrences of each distinct word
    Frequency,
}

/// Number of alphabetic runs of at least [`MIN_WORD_LEN`] letters.
///
/// Runs are measured in full, so a run longer than the tokenizer's cap still
/// counts once.
pub fn num_words(text: &str) -> usize {
    let mut chars = text.chars().peekable();
    let mut total = 0;
    loop {
        chars.skip_until(char::is_ascii_alphabetic);
        if chars.peek().is_none() {
            break;
        }
        let run = chars.peeking_take_while(char::is_ascii_alphabetic).count();
        if run >= MIN_WORD_LEN {
            total += 1;
        }
    }
    total
}

/// Add every word in `text` to `words`.
pub fn count_words(words: &mut WordList, text: &str) -> Result<()> {
    Tokenizer::new(text).try_for_each(|token| words.insert_or_increment(&token.word))
}

/// Read a whole source, treating invalid UTF-8 as delimiters.
pub fn read_source<R: Read>(mut input: R, source_name: &str) -> Result<String> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Read {
            source_name: source_name.to_owned(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Accumulates results over every input of one invocation.
#[derive(Debug, Default)]
pub struct Counter {
    mode: Mode,
    total: usize,
    words: WordList,
}

impl Counter {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn process(&mut self, text: &str) -> Result<()> {
        match self.mode {
            Mode::Count => {
                let found = num_words(text);
                log::debug!("counted {found} words");
                self.total += found;
            }
            Mode::Frequency => {
                let before = self.words.len();
                count_words(&mut self.words, text)?;
                log::debug!("{} new distinct words", self.words.len() - before);
            }
        }
        Ok(())
    }

    /// Read `input` to the end and process it.
    pub fn process_reader<R: Read>(&mut self, input: R, source_name: &str) -> Result<()> {
        let text = read_source(input, source_name)?;
        self.process(&text)
    }

    /// Print the final result. Frequency mode sorts the entries first.
    pub fn report<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.mode {
            Mode::Count => writeln!(out, "The total number of words is: {}", self.total),
            Mode::Frequency => {
                self.words.sort();
                writeln!(out, "The frequencies of each word are: ")?;
                self.words.write_to(out)
            }
        }
    }
}
