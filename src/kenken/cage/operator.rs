use crate::kenken::Value;

/// The `Operator` enum represents each of the possible math operators
/// that can be in a cage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Nop,
}

impl Operator {
    /// Retrieve the character representation of the symbol
    pub fn symbol(self) -> Option<char> {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => 'x',
            Operator::Divide => '÷',
            Operator::Nop => return None,
        };
        Some(symbol)
    }

    /// Retrieve an `Operator` from its corresponding symbol
    pub fn from_symbol(c: char) -> Option<Operator> {
        let o = match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            'x' | '*' => Operator::Multiply,
            '÷' | '/' => Operator::Divide,
            _ => return None,
        };
        Some(o)
    }

    /// Applies the operator to the values of a cage.
    ///
    /// Subtraction and division take exactly two values in either order and
    /// division must come out even. A `Nop` takes exactly one value. Returns
    /// `None` on overflow.
    pub fn apply(self, values: &[Value]) -> Option<Value> {
        match self {
            Operator::Add if !values.is_empty() => values
                .iter()
                .try_fold(0 as Value, |acc, &v| acc.checked_add(v)),
            Operator::Multiply if !values.is_empty() => values
                .iter()
                .try_fold(1 as Value, |acc, &v| acc.checked_mul(v)),
            Operator::Subtract => match *values {
                [a, b] => a.checked_sub(b).and_then(Value::checked_abs),
                _ => None,
            },
            Operator::Divide => match *values {
                [a, b] => {
                    let (min, max) = if a < b { (a, b) } else { (b, a) };
                    if min != 0 && max % min == 0 {
                        Some(max / min)
                    } else {
                        None
                    }
                }
                _ => None,
            },
            Operator::Nop => match *values {
                [a] => Some(a),
                _ => None,
            },
            _ => None,
        }
    }
}
