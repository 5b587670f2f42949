use logos::Logos;

/// Raw token classes produced by the logos state machine.
///
/// Only ASCII letters are alphabetic. Everything else, including multi-byte
/// characters and invalid UTF-8 replacements, separates words.
#[derive(Logos, Clone, Debug, PartialEq)]
pub enum TokenKind<'input> {
    #[regex("[a-zA-Z]+", |lex| lex.slice())]
    Alpha(&'input str),

    #[regex("[^a-zA-Z]+", logos::skip)]
    #[error]
    Delimiter,
}

impl<'input> TokenKind<'input> {
    #[inline]
    pub fn is_alpha(&self) -> bool {
        matches!(self, TokenKind::Alpha(_))
    }

    #[inline]
    pub fn try_into_alpha(&self) -> Option<&'input str> {
        match self {
            TokenKind::Alpha(run) => Some(*run),
            _ => None,
        }
    }
}
