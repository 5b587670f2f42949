mod token_kinds;
use logos::{Lexer, Span, SpannedIter};

pub use token_kinds::*;

/// Longest word the tokenizer will emit. Longer runs are cut short.
pub const MAX_WORD_LEN: usize = 64;

/// Byte offset into a source text
type Offset = usize;

/// A pair of source offsets covering the whole alphabetic run a token came
/// from, including any characters dropped by truncation.
pub type ByteSpan = (Offset, Offset);

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Lowercased word, at most [`MAX_WORD_LEN`] characters long
    pub word: String,
    /// Byte range from the source text that this token was found at
    pub source_span: ByteSpan,
}

impl Token {
    pub fn from_run(run: &str, span: Span) -> Self {
        // `run` is ASCII only, so byte and character lengths agree.
        let kept = &run[..run.len().min(MAX_WORD_LEN)];
        Self {
            word: kept.to_ascii_lowercase(),
            source_span: (span.start, span.end),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Splits a text into lowercase alphabetic words.
///
/// A fresh `Tokenizer` starts at the beginning of its input, so each call to
/// [`Tokenizer::new`] yields the full sequence again.
pub struct Tokenizer<'input> {
    raw_lexer: SpannedIter<'input, TokenKind<'input>>,
}

impl<'input> Tokenizer<'input> {
    pub fn new(source: &'input str) -> Self {
        Self {
            raw_lexer: Lexer::new(source).spanned(),
        }
    }
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        // Delimiters are skipped inside logos, but an unmatched byte still
        // surfaces as `Delimiter`; step over it.
        self.raw_lexer.by_ref().find_map(|(kind, span)| {
            kind.try_into_alpha().map(|run| {
                let token = Token::from_run(run, span);
                log::trace!("{token:?}");
                token
            })
        })
    }
}
