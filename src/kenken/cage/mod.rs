//! Cages and the clues printed on them

pub use self::operator::Operator;

use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::collections::square::Coord;
use crate::error::{InvalidPuzzle, ParseClueError};
use crate::kenken::Value;

mod operator;

/// The largest number of cells in a generated cage
pub const MAX_CAGE_SIZE: usize = 4;

/// The arithmetic constraint printed on a cage, such as "24x" or "5"
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    /// The math operator that must be used with the numbers in the cage
    /// to produce the target number
    pub operator: Operator,

    /// The target number that must be produced using the numbers in the cage
    pub target: Value,
}

impl Clue {
    #[allow(missing_docs)]
    pub fn new(operator: Operator, target: Value) -> Self {
        Self { operator, target }
    }

    /// Returns true if the values, in any order, produce the target
    pub fn is_satisfied_by(self, values: &[Value]) -> bool {
        self.operator.apply(values) == Some(self.target)
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)?;
        if let Some(symbol) = self.operator.symbol() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Clue {
    type Err = ParseClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let last = s.chars().last().ok_or(ParseClueError::Empty)?;
        let (operator, number) = if last.is_ascii_digit() {
            (Operator::Nop, s)
        } else {
            let operator =
                Operator::from_symbol(last).ok_or(ParseClueError::UnknownOperator(last))?;
            (operator, &s[..s.len() - last.len_utf8()])
        };
        let target = number
            .parse()
            .map_err(|_| ParseClueError::InvalidTarget(s.to_string()))?;
        Ok(Clue { operator, target })
    }
}

/// A cage in a KenKen puzzle
///
/// Every cell in a KenKen puzzle belongs to a cage.
/// Every cage has an operator and a target number.
#[derive(Clone, Debug, PartialEq)]
pub struct Cage {
    /// The cells in the cage, in the order they were added
    cells: Box<[Coord]>,

    clue: Clue,
}

impl Cage {
    /// Creates a cage, checking that the operator fits the number of cells
    pub fn new(
        cells: impl Into<Box<[Coord]>>,
        operator: Operator,
        target: Value,
    ) -> Result<Self, InvalidPuzzle> {
        let cage = Self::from_parts(cells.into(), Clue::new(operator, target));
        validate(&cage)?;
        Ok(cage)
    }

    pub(crate) fn from_parts(cells: Box<[Coord]>, clue: Clue) -> Self {
        Self { cells, clue }
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.clue.target
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.clue.operator
    }

    /// The operator and target together
    pub fn clue(&self) -> Clue {
        self.clue
    }

    /// The cells in the cage
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// The number of cells in the cage
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a valid cage
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The clue as it is printed on the puzzle
    pub fn label(&self) -> String {
        self.clue.to_string()
    }
}

fn validate(cage: &Cage) -> Result<(), InvalidPuzzle> {
    match cage.cells().len() {
        0 => return Err(InvalidPuzzle::new("cage cells must not be empty")),
        1 => match cage.operator() {
            Operator::Nop => (),
            operator => {
                return Err(InvalidPuzzle::new(format!(
                    "cage operator ({}) must have more than one cell",
                    operator.symbol().unwrap_or('?')
                )))
            }
        },
        len => match cage.operator() {
            Operator::Nop => {
                return Err(InvalidPuzzle::new(
                    "cage with multiple cells must have an operator",
                ))
            }
            Operator::Subtract | Operator::Divide if len != 2 => {
                return Err(InvalidPuzzle::new(format!(
                    "cage operator ({}) must have exactly two cells",
                    cage.operator().symbol().unwrap_or('?')
                )))
            }
            _ => (),
        },
    }
    Ok(())
}

impl Serialize for Cage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cage", 4)?;
        state.serialize_field("cells", &self.cells)?;
        state.serialize_field("label", &self.label())?;
        state.serialize_field("op", &self.operator().symbol())?;
        state.serialize_field("target", &self.target())?;
        state.end()
    }
}
