//! Angle fields of IR instructions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::placeholder::{HashPlaceholders, PlaceholderResolver};

/// An angle operand: a literal number or a placeholder token.
///
/// The field text is kept verbatim. Negation toggles a leading `-` on that
/// text, so negating twice gives back the same field (an explicit `+` is
/// dropped) and a literal never picks up float formatting noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AngleExpr {
    /// A literal number, as written.
    Literal(String),
    /// A placeholder reference, as written.
    Placeholder(String),
}

impl AngleExpr {
    /// Classify `text` with the default placeholder grammar.
    pub fn parse(text: &str) -> IrResult<Self> {
        Self::parse_with(text, &HashPlaceholders)
    }

    /// Classify `text` with a custom resolver.
    pub fn parse_with(text: &str, resolver: &dyn PlaceholderResolver) -> IrResult<Self> {
        if text.parse::<f64>().is_ok_and(f64::is_finite) {
            return Ok(AngleExpr::Literal(text.to_string()));
        }
        if resolver.is_legal(text) {
            return Ok(AngleExpr::Placeholder(text.to_string()));
        }
        Err(IrError::malformed(
            "",
            format!("'{text}' is neither a number nor a placeholder"),
        ))
    }

    /// A literal from a number, written with the shortest round-trip form.
    pub fn literal(value: f64) -> Self {
        AngleExpr::Literal(format!("{value}"))
    }

    /// A degree literal from an angle in radians.
    ///
    /// Degrees are rounded to 10 decimals so that e.g. `π/3` is written as
    /// `60` rather than `59.99999999999999`.
    pub fn from_radians(rads: f64) -> Self {
        let degs = (rads.to_degrees() * 1e10).round() / 1e10;
        // no "-0"
        let degs = if degs == 0.0 { 0.0 } else { degs };
        AngleExpr::literal(degs)
    }

    /// The field text.
    pub fn as_str(&self) -> &str {
        match self {
            AngleExpr::Literal(s) | AngleExpr::Placeholder(s) => s,
        }
    }

    /// Numeric value of a literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AngleExpr::Literal(s) => s.parse().ok(),
            AngleExpr::Placeholder(_) => None,
        }
    }

    /// Is this a placeholder?
    pub fn is_symbolic(&self) -> bool {
        matches!(self, AngleExpr::Placeholder(_))
    }

    /// The negated angle.
    #[must_use]
    pub fn negated(&self) -> Self {
        let flip = |s: &str| match s.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => match s.strip_prefix('+') {
                Some(rest) => format!("-{rest}"),
                None => format!("-{s}"),
            },
        };
        match self {
            AngleExpr::Literal(s) => AngleExpr::Literal(flip(s)),
            AngleExpr::Placeholder(s) => AngleExpr::Placeholder(flip(s)),
        }
    }
}

impl fmt::Display for AngleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<f64> for AngleExpr {
    fn from(value: f64) -> Self {
        AngleExpr::literal(value)
    }
}
