use std::fmt;

use crate::Number;

/// Identifier of a single-argument function.
///
/// `Identity` and `Negate` are intrinsic: they have no callable name and are
/// only produced by the lexer for the sign prefixes `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FunctionId {
    /// `+x`
    Identity,
    /// `-x`
    Negate,
    /// `abs(x)`
    Abs,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `asin(x)`
    Asin,
    /// `acos(x)`
    Acos,
    /// `atan(x)`
    Atan,
    /// `exp(x)`
    Exp,
    /// `log(x)`, the natural logarithm
    Log,
    /// `log10(x)`
    Log10,
}

impl FunctionId {
    /// Every function that can be called by name, in registry order.
    pub const NAMED: [FunctionId; 10] = [
        FunctionId::Abs,
        FunctionId::Sin,
        FunctionId::Cos,
        FunctionId::Tan,
        FunctionId::Asin,
        FunctionId::Acos,
        FunctionId::Atan,
        FunctionId::Exp,
        FunctionId::Log,
        FunctionId::Log10,
    ];

    /// Returns true for the sign pseudo-functions `Identity` and `Negate`.
    pub fn is_sign(self) -> bool {
        matches!(self, FunctionId::Identity | FunctionId::Negate)
    }

    /// The display name of this function. Sign functions render as `+`/`-`.
    pub fn name(self) -> &'static str {
        match self {
            FunctionId::Identity => "+",
            FunctionId::Negate => "-",
            FunctionId::Abs => "abs",
            FunctionId::Sin => "sin",
            FunctionId::Cos => "cos",
            FunctionId::Tan => "tan",
            FunctionId::Asin => "asin",
            FunctionId::Acos => "acos",
            FunctionId::Atan => "atan",
            FunctionId::Exp => "exp",
            FunctionId::Log => "log",
            FunctionId::Log10 => "log10",
        }
    }

    /// Applies the function to `x`.
    ///
    /// Domain violations are not errors: `log(-1)` is `NaN` and `log(0)` is
    /// negative infinity, exactly as the underlying `f64` method reports.
    pub fn apply(self, x: Number) -> Number {
        match self {
            FunctionId::Identity => x,
            FunctionId::Negate => -x,
            FunctionId::Abs => x.abs(),
            FunctionId::Sin => x.sin(),
            FunctionId::Cos => x.cos(),
            FunctionId::Tan => x.tan(),
            FunctionId::Asin => x.asin(),
            FunctionId::Acos => x.acos(),
            FunctionId::Atan => x.atan(),
            FunctionId::Exp => x.exp(),
            FunctionId::Log => x.ln(),
            FunctionId::Log10 => x.log10(),
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
