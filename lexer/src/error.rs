use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
pub enum LexicalError {
    #[snafu(display("lexical error on symbol: {symbol}"))]
    UnexpectedCharacter { symbol: char },

    /// `|` or `&` not doubled.
    #[snafu(display("lexical error on symbol: {symbol} (expected '{symbol}{symbol}')"))]
    IncompleteOperator { symbol: char },
}

impl LexicalError {
    pub fn symbol(&self) -> char {
        match self {
            LexicalError::UnexpectedCharacter { symbol }
            | LexicalError::IncompleteOperator { symbol } => *symbol,
        }
    }
}
