//! Query parser for converting query strings into [`Query`] trees.

use std::iter::Peekable;
use std::vec::IntoIter;

use crate::error::{Result, WikiSearchError};
use crate::query::query::Query;

/// A simple boolean query parser.
///
/// Supported syntax:
/// - Terms: `java`
/// - Conjunction: `java AND programming`, or just `java programming`
/// - Disjunction: `java OR python`
/// - Exclusion: `java MINUS coffee`
/// - Grouping: `(java OR python) MINUS snake`
///
/// Operators are upper-case keywords. `AND` and `MINUS` share a precedence
/// level and associate to the left; `OR` binds loosest.
#[derive(Debug, Clone)]
pub struct QueryParser {
    /// Lower-case terms before building the query.
    lowercase: bool,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryParser {
    /// Create a new query parser. Terms are lower-cased by default.
    pub fn new() -> Self {
        QueryParser { lowercase: true }
    }

    /// Set whether terms are lower-cased.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Parse a query string into a [`Query`].
    pub fn parse(&self, query_str: &str) -> Result<Query> {
        let tokens = tokenize(query_str, self.lowercase);
        if tokens.is_empty() {
            return Err(WikiSearchError::parse("Empty query"));
        }

        let mut parser = TokenParser {
            tokens: tokens.into_iter().peekable(),
        };
        let query = parser.parse_or_expression()?;

        match parser.tokens.next() {
            None => Ok(query),
            Some(Token::RParen) => Err(WikiSearchError::parse("Unmatched ')'")),
            Some(token) => Err(WikiSearchError::parse(format!(
                "Unexpected {} after complete query",
                token.describe()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    And,
    Or,
    Minus,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(word) => format!("term '{word}'"),
            Token::And => "'AND'".to_string(),
            Token::Or => "'OR'".to_string(),
            Token::Minus => "'MINUS'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
        }
    }
}

fn tokenize(query_str: &str, lowercase: bool) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = query_str.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch == '(' {
            chars.next();
            tokens.push(Token::LParen);
        } else if ch == ')' {
            chars.next();
            tokens.push(Token::RParen);
        } else {
            let mut word = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() || ch == '(' || ch == ')' {
                    break;
                }
                word.push(ch);
                chars.next();
            }

            tokens.push(match word.as_str() {
                "AND" => Token::And,
                "OR" => Token::Or,
                "MINUS" => Token::Minus,
                _ if lowercase => Token::Word(word.to_lowercase()),
                _ => Token::Word(word),
            });
        }
    }

    tokens
}

struct TokenParser {
    tokens: Peekable<IntoIter<Token>>,
}

impl TokenParser {
    fn parse_or_expression(&mut self) -> Result<Query> {
        let mut left = self.parse_and_expression()?;

        while self.tokens.peek() == Some(&Token::Or) {
            self.tokens.next();
            let right = self.parse_and_expression()?;
            left = left.or(right);
        }

        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<Query> {
        let mut left = self.parse_primary()?;

        loop {
            match self.tokens.peek() {
                Some(Token::And) => {
                    self.tokens.next();
                    let right = self.parse_primary()?;
                    left = left.and(right);
                }
                Some(Token::Minus) => {
                    self.tokens.next();
                    let right = self.parse_primary()?;
                    left = left.minus(right);
                }
                // Adjacent terms are an implicit AND.
                Some(Token::Word(_)) | Some(Token::LParen) => {
                    let right = self.parse_primary()?;
                    left = left.and(right);
                }
                _ => break,
            }
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Query> {
        match self.tokens.next() {
            Some(Token::Word(word)) => Ok(Query::Term(word)),
            Some(Token::LParen) => {
                let inner = self.parse_or_expression()?;
                match self.tokens.next() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(WikiSearchError::parse(format!(
                        "Expected ')' but found {}",
                        token.describe()
                    ))),
                    None => Err(WikiSearchError::parse("Unclosed '('")),
                }
            }
            Some(token) => Err(WikiSearchError::parse(format!(
                "Expected a term but found {}",
                token.describe()
            ))),
            None => Err(WikiSearchError::parse(
                "Expected a term but found end of input",
            )),
        }
    }
}
