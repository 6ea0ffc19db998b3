//! Contains functionality regarding the tokenizing of an α-CTL formula string.

use crate::error::Error;

/// A single lexical token of the prefix-functional formula syntax (e.g.
/// `ag(ef(and(r, not(p))))`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An operator head or a proposition name, e.g. `ag`, `not`, `true`, `p`, `robot`.
    Ident(String),
    LParen,
    RParen,
    Comma,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Try to tokenize the given formula string into a flat token stream.
pub fn try_tokenize_formula(formula: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut chars = formula.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if is_ident_start(c) => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if is_ident_start(c) {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            other => {
                return Err(Error::ParseError {
                    formula: formula.to_string(),
                    reason: format!("unexpected character `{other}`"),
                });
            }
        }
    }
    Ok(tokens)
}
