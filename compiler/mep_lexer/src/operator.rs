//! Operators and their precedence.
//!
//! | rank | operators                          |
//! |------|------------------------------------|
//! | 0    | sentinel                           |
//! | 1    | `+` `-` `&` `\|` (binary)          |
//! | 2    | `*` `/` `%`                        |
//! | 3    | `^` (right associative)            |
//! | 4    | sign prefixes `+` `-`              |
//! | 5    | named functions (`sin`, `log`, …)  |

use std::fmt;

use mep_math::FunctionId;

/// An operator taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, floating point remainder
    Mod,
    /// `^`
    Pow,
    /// `&`, parsed but has no numeric meaning
    And,
    /// `|`, parsed but has no numeric meaning
    Or,
}

impl BinaryOperator {
    /// Precedence rank, higher binds tighter.
    pub fn rank(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::And | BinaryOperator::Or => 1,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 2,
            BinaryOperator::Pow => 3,
        }
    }

    /// Only `^` groups to the right.
    pub fn is_right_associative(self) -> bool {
        self == BinaryOperator::Pow
    }

    /// The source character of the operator.
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Mod => '%',
            BinaryOperator::Pow => '^',
            BinaryOperator::And => '&',
            BinaryOperator::Or => '|',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An entry of the parser's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Lowest-precedence marker bracketing a (parenthesised or top-level) scope.
    Sentinel,
    /// Binary operator.
    Binary(BinaryOperator),
    /// Unary application of a function, including the sign functions.
    Apply(FunctionId),
}

impl Operator {
    /// True for function applications (signs included).
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Apply(_))
    }

    /// True for binary operators.
    pub fn is_binary(self) -> bool {
        matches!(self, Operator::Binary(_))
    }

    /// True for the sign prefixes `+x` and `-x`.
    pub fn is_sign(self) -> bool {
        matches!(self, Operator::Apply(f) if f.is_sign())
    }

    /// True for the `-x` prefix.
    pub fn is_negate(self) -> bool {
        self == Operator::Apply(FunctionId::Negate)
    }

    /// Number of operands the operator consumes when reduced.
    pub fn arity(self) -> usize {
        match self {
            Operator::Sentinel => 0,
            Operator::Binary(_) => 2,
            Operator::Apply(_) => 1,
        }
    }

    /// Precedence rank, see the module table.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Sentinel => 0,
            Operator::Binary(op) => op.rank(),
            Operator::Apply(f) if f.is_sign() => 4,
            Operator::Apply(_) => 5,
        }
    }

    /// True if `self`, sitting on top of the operator stack, must be reduced
    /// before `incoming` is pushed.
    ///
    /// Equal ranks reduce first unless the incoming operator is right
    /// associative, which makes `a - b - c` group as `(a - b) - c` and
    /// `a ^ b ^ c` as `a ^ (b ^ c)`.
    pub fn reduces_before(self, incoming: Operator) -> bool {
        let (top, new) = (self.rank(), incoming.rank());
        top > new || (top == new && !incoming.is_right_associative())
    }

    /// Right associativity, `^` only.
    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Binary(op) if op.is_right_associative())
    }

    /// Printable symbol; `?` for operators that have none.
    pub fn symbol(self) -> char {
        match self {
            Operator::Binary(op) => op.symbol(),
            Operator::Apply(FunctionId::Identity) => '+',
            Operator::Apply(FunctionId::Negate) => '-',
            Operator::Apply(_) | Operator::Sentinel => '?',
        }
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Operator::Binary(op)
    }
}

impl From<FunctionId> for Operator {
    fn from(function: FunctionId) -> Self {
        Operator::Apply(function)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Sentinel => f.write_str("<sentinel>"),
            Operator::Binary(op) => write!(f, "{op}"),
            Operator::Apply(function) => write!(f, "{function}"),
        }
    }
}
