//! Control fields (`IF ...`) of IR instructions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IrError;

/// How a control qubit conditions an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Active when the qubit is `|1>` (`T`).
    True,
    /// Active when the qubit is `|0>` (`F`).
    False,
    /// Multiplexor bit with the given position in the coefficient index.
    Multiplex(u32),
}

/// One control token, e.g. `3T`, `2F` or `1(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Control {
    /// Qubit position.
    pub bit: usize,
    /// Conditioning kind.
    pub kind: ControlKind,
}

impl Control {
    /// Control on `|1>`.
    pub fn on_true(bit: usize) -> Self {
        Self {
            bit,
            kind: ControlKind::True,
        }
    }

    /// Control on `|0>`.
    pub fn on_false(bit: usize) -> Self {
        Self {
            bit,
            kind: ControlKind::False,
        }
    }

    /// Multiplexor control.
    pub fn multiplex(bit: usize, position: u32) -> Self {
        Self {
            bit,
            kind: ControlKind::Multiplex(position),
        }
    }

    /// Is this a multiplexor control?
    pub fn is_multiplex(&self) -> bool {
        matches!(self.kind, ControlKind::Multiplex(_))
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ControlKind::True => write!(f, "{}T", self.bit),
            ControlKind::False => write!(f, "{}F", self.bit),
            ControlKind::Multiplex(k) => write!(f, "{}({k})", self.bit),
        }
    }
}

impl FromStr for Control {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || IrError::malformed("", format!("invalid control token '{s}'"));
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(bad());
        }
        let bit: usize = s[..digits].parse().map_err(|_| bad())?;
        let kind = match &s[digits..] {
            "T" => ControlKind::True,
            "F" => ControlKind::False,
            rest => {
                let inner = rest
                    .strip_prefix('(')
                    .and_then(|r| r.strip_suffix(')'))
                    .ok_or_else(bad)?;
                ControlKind::Multiplex(inner.parse().map_err(|_| bad())?)
            }
        };
        Ok(Self { bit, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_tokens() {
        assert_eq!("3T".parse::<Control>().unwrap(), Control::on_true(3));
        assert_eq!("12F".parse::<Control>().unwrap(), Control::on_false(12));
        assert_eq!("1(0)".parse::<Control>().unwrap(), Control::multiplex(1, 0));
        assert_eq!(Control::multiplex(4, 2).to_string(), "4(2)");
    }

    #[test]
    fn test_bad_control_tokens() {
        for bad in ["T", "3", "3X", "3(", "3()", "3(a)", "-1T"] {
            assert!(bad.parse::<Control>().is_err(), "{bad} should fail");
        }
    }
}
