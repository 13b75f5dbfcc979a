//! The closed set of `(container, item)` pairs the C++ generator supports
//!
//! Every layout decision (declaration form, scanf format, address
//! expression) is an exhaustive match on [`Shape`], so adding a pair means
//! the compiler points at every table that needs a row.

use crate::input_def::{Container, Item};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    SingleNumber,
    SingleString,
    HArrayNumber,
    HArrayString,
    HArrayChar,
    VArrayNumber,
    VArrayString,
    MatrixNumber,
    MatrixString,
    MatrixChar,
}

impl Shape {
    pub const ALL: [Shape; 10] = [
        Shape::SingleNumber,
        Shape::SingleString,
        Shape::HArrayNumber,
        Shape::HArrayString,
        Shape::HArrayChar,
        Shape::VArrayNumber,
        Shape::VArrayString,
        Shape::MatrixNumber,
        Shape::MatrixString,
        Shape::MatrixChar,
    ];

    /// Look up the shape of a definition; unsupported pairs are an error
    pub fn of(container: Container, item: Item) -> Result<Self> {
        use Container::*;

        let shape = match (container, item) {
            (Single, Item::Number) => Shape::SingleNumber,
            (Single, Item::String) => Shape::SingleString,
            (HArray, Item::Number) => Shape::HArrayNumber,
            (HArray, Item::String) => Shape::HArrayString,
            (HArray, Item::Char) => Shape::HArrayChar,
            (VArray, Item::Number) => Shape::VArrayNumber,
            (VArray, Item::String) => Shape::VArrayString,
            (Matrix, Item::Number) => Shape::MatrixNumber,
            (Matrix, Item::String) => Shape::MatrixString,
            (Matrix, Item::Char) => Shape::MatrixChar,
            (Single, Item::Char) | (VArray, Item::Char) => {
                return Err(Error::UnsupportedCombination { container, item })
            }
        };
        Ok(shape)
    }

    pub fn container(self) -> Container {
        use Shape::*;

        match self {
            SingleNumber | SingleString => Container::Single,
            HArrayNumber | HArrayString | HArrayChar => Container::HArray,
            VArrayNumber | VArrayString => Container::VArray,
            MatrixNumber | MatrixString | MatrixChar => Container::Matrix,
        }
    }

    pub fn item(self) -> Item {
        use Shape::*;

        match self {
            SingleNumber | HArrayNumber | VArrayNumber | MatrixNumber => Item::Number,
            SingleString | HArrayString | VArrayString | MatrixString => Item::String,
            HArrayChar | MatrixChar => Item::Char,
        }
    }

    /// Number of enclosing `REP` loops the read statement needs.
    /// A character run's last dimension is its string length, absorbed by `%s`.
    pub fn loop_depth(self) -> usize {
        let arity = self.container().arity();
        match self.item() {
            Item::Char => arity - 1,
            Item::Number | Item::String => arity,
        }
    }

    /// scanf conversion for one value
    pub fn format(self) -> &'static str {
        match self.item() {
            Item::Number => "%d",
            Item::String | Item::Char => "%s",
        }
    }

    /// scanf target for variable `v`, using `i` and `j` as loop indices
    pub fn address(self, v: &str) -> String {
        use Shape::*;

        match self {
            SingleNumber => format!("&{}", v),
            SingleString => v.to_string(),
            HArrayNumber | VArrayNumber => format!("{} + i", v),
            HArrayString | VArrayString => format!("{}[i]", v),
            HArrayChar => v.to_string(),
            MatrixNumber => format!("&{}[i][j]", v),
            MatrixString => format!("{}[i][j]", v),
            MatrixChar => format!("{}[i]", v),
        }
    }
}
