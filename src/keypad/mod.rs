//! The keypad boundary.
//!
//! A calculator window has 17 buttons laid out five rows deep and four
//! columns wide, with `C` alone on the last row:
//!
//! ```text
//! 7 8 9 /
//! 4 5 6 *
//! 1 2 3 -
//! 0 . = +
//! C
//! ```
//!
//! A shell renders [`LAYOUT`], and forwards each clicked label to a
//! [`Dispatcher`], which decodes it into a [`Token`] and applies it.

mod dispatcher;

pub use dispatcher::Dispatcher;

use crate::core::{Digit, Operator, Token};

/// Number of columns in the button grid.
pub const COLUMNS: usize = 4;

/// Buttons in row-major order.
pub const LAYOUT: [&[Token]; 5] = [
    &[
        Token::Digit(Digit(7)),
        Token::Digit(Digit(8)),
        Token::Digit(Digit(9)),
        Token::Operator(Operator::Divide),
    ],
    &[
        Token::Digit(Digit(4)),
        Token::Digit(Digit(5)),
        Token::Digit(Digit(6)),
        Token::Operator(Operator::Multiply),
    ],
    &[
        Token::Digit(Digit(1)),
        Token::Digit(Digit(2)),
        Token::Digit(Digit(3)),
        Token::Operator(Operator::Subtract),
    ],
    &[
        Token::Digit(Digit(0)),
        Token::DecimalPoint,
        Token::Equals,
        Token::Operator(Operator::Add),
    ],
    &[Token::Clear],
];

/// A button's grid position and the token it produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Button {
    pub row: usize,
    pub column: usize,
    pub token: Token,
}

impl Button {
    pub fn label(&self) -> &'static str {
        self.token.label()
    }
}

/// Every button, row by row.
pub fn buttons() -> impl Iterator<Item = Button> {
    LAYOUT.iter().enumerate().flat_map(|(row, tokens)| {
        tokens.iter().enumerate().map(move |(column, &token)| Button { row, column, token })
    })
}

/// Every button label, row by row.
pub fn labels() -> impl Iterator<Item = &'static str> {
    buttons().map(|button| button.token.label())
}
