use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of a process spaces expression.
///
/// Every reserved word has its own variant; any other run of non-whitespace
/// characters is a [`Token::Variable`]. Logos always takes the longest match,
/// so `ands` or `[=x` lex as variables, never as a keyword plus a remainder.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `-`
    #[token("-")]
    Negate,
    /// `/`
    #[token("/")]
    DualNegate,
    /// `robust`
    #[token("robust")]
    Robust,
    /// `not`
    #[token("not")]
    Not,
    /// `||`
    #[token("||")]
    Par,
    /// `[=`
    #[token("[=")]
    Entails,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `oplus`
    #[token("oplus")]
    Oplus,
    /// `meet`
    #[token("meet")]
    Meet,
    /// `join`
    #[token("join")]
    Join,
    /// `lpop`
    #[token("lpop")]
    Lpop,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `implies`
    #[token("implies")]
    Implies,
    /// `equiv`
    #[token("equiv")]
    Equiv,
    /// `top`, the constant `E`.
    #[token("top")]
    Top,
    /// `bot`, the constant `R`.
    #[token("bot")]
    Bot,
    /// `phi`, the constant `G`.
    #[token("phi")]
    Phi,
    /// Variable names: any whitespace-free word that is not reserved.
    #[regex(r"[^\s]+", |lex| lex.slice().to_owned(), priority = 1, allow_greedy = true)]
    Variable(String),
    /// Whitespace of any kind.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the variable name if this token is a variable.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Negate => "-",
            Self::DualNegate => "/",
            Self::Robust => "robust",
            Self::Not => "not",
            Self::Par => "||",
            Self::Entails => "[=",
            Self::EqualEqual => "==",
            Self::Oplus => "oplus",
            Self::Meet => "meet",
            Self::Join => "join",
            Self::Lpop => "lpop",
            Self::And => "and",
            Self::Or => "or",
            Self::Implies => "implies",
            Self::Equiv => "equiv",
            Self::Top => "top",
            Self::Bot => "bot",
            Self::Phi => "phi",
            Self::Variable(name) => name.as_str(),
            Self::Ignored => " ",
        };
        f.write_str(text)
    }
}

/// Splits an expression into its token stream.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] if the lexer rejects part of the
/// input.
///
/// # Example
/// ```
/// use triuth::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("robust || A bot").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Robust, Token::Par, Token::Variable("A".to_string()), Token::Bot]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token:    lexer.slice().to_string(),
                                                         position: tokens.len(), });
            },
        }
    }

    Ok(tokens)
}
