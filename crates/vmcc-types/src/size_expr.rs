//! Deferred size arithmetic for types whose size is only known at run time.

use std::fmt;

use crate::ids::SizeExprId;

/// Size expression handed to the code generator.
///
/// Constructors fold constant operands, so a type with a compile-time size
/// always yields `SizeExpr::Const`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SizeExpr {
    Const(u64),
    /// Value of a runtime expression owned by the code generator.
    Runtime(SizeExprId),
    Mul(Box<SizeExpr>, Box<SizeExpr>),
    /// Division rounding up by a constant divisor.
    DivCeil(Box<SizeExpr>, u64),
}

impl SizeExpr {
    /// Product of two expressions. `None` if folding two constants
    /// overflows.
    pub fn checked_mul(lhs: SizeExpr, rhs: SizeExpr) -> Option<SizeExpr> {
        Some(match (lhs, rhs) {
            (Self::Const(a), Self::Const(b)) => Self::Const(a.checked_mul(b)?),
            (Self::Const(0), _) | (_, Self::Const(0)) => Self::Const(0),
            (Self::Const(1), other) | (other, Self::Const(1)) => other,
            (lhs, rhs) => Self::Mul(Box::new(lhs), Box::new(rhs)),
        })
    }

    pub fn div_ceil(lhs: SizeExpr, divisor: u64) -> SizeExpr {
        if divisor == 1 {
            return lhs;
        }
        match lhs {
            Self::Const(a) => Self::Const(a.div_ceil(divisor)),
            lhs => Self::DivCeil(Box::new(lhs), divisor),
        }
    }

    pub fn as_const(&self) -> Option<u64> {
        match *self {
            Self::Const(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_const(&self) -> bool {
        self.as_const().is_some()
    }

    /// Evaluate with `runtime` supplying the value of each runtime operand.
    /// `None` on overflow.
    pub fn eval(&self, runtime: &impl Fn(SizeExprId) -> u64) -> Option<u64> {
        match self {
            Self::Const(value) => Some(*value),
            Self::Runtime(expr) => Some(runtime(*expr)),
            Self::Mul(lhs, rhs) => lhs.eval(runtime)?.checked_mul(rhs.eval(runtime)?),
            Self::DivCeil(lhs, divisor) => Some(lhs.eval(runtime)?.div_ceil(*divisor)),
        }
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Runtime(expr) => write!(f, "{expr}"),
            Self::Mul(lhs, rhs) => write!(f, "({lhs} * {rhs})"),
            Self::DivCeil(lhs, divisor) => write!(f, "ceil({lhs} / {divisor})"),
        }
    }
}
