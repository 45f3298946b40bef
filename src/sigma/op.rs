//! Discriminator opcodes for the SigmaBoolean family
//!
//! The wire field `op` carries the ErgoTree opcode of the node, written as
//! a signed byte.

use std::fmt;

/// Opcode identifying one concrete SigmaBoolean variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SigmaOp {
    /// Conjunction (`CAND`, 0x96)
    And,
    /// Disjunction (`COR`, 0x97)
    Or,
    /// k-out-of-n threshold (`CTHRESHOLD`, 0x98)
    Threshold,
    /// Negation (`LogicalNot`, 0xEF)
    Not,
    /// Discrete log proof (0xCD)
    ProveDlog,
    /// Diffie-Hellman tuple proof (0xCE)
    ProveDhTuple,
    /// Constant proposition
    Trivial,
}

impl SigmaOp {
    /// All known opcodes, in declaration order
    pub const ALL: [SigmaOp; 7] = [
        SigmaOp::And,
        SigmaOp::Or,
        SigmaOp::Threshold,
        SigmaOp::Not,
        SigmaOp::ProveDlog,
        SigmaOp::ProveDhTuple,
        SigmaOp::Trivial,
    ];

    /// Returns the signed wire code
    pub fn code(&self) -> i8 {
        match self {
            SigmaOp::And => 0x96_u8 as i8,
            SigmaOp::Or => 0x97_u8 as i8,
            SigmaOp::Threshold => 0x98_u8 as i8,
            SigmaOp::Not => 0xEF_u8 as i8,
            SigmaOp::ProveDlog => 0xCD_u8 as i8,
            SigmaOp::ProveDhTuple => 0xCE_u8 as i8,
            SigmaOp::Trivial => 0,
        }
    }

    /// Looks up the opcode for a wire value.
    ///
    /// Values outside the signed byte range never match.
    pub fn from_code(code: i64) -> Option<Self> {
        let code = i8::try_from(code).ok()?;
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    /// Class name used in the display rendering
    pub fn class_name(&self) -> &'static str {
        match self {
            SigmaOp::And => "SigmaBooleanAndPredicate",
            SigmaOp::Or => "SigmaBooleanOrPredicate",
            SigmaOp::Threshold => "SigmaBooleanThresholdPredicate",
            SigmaOp::Not => "SigmaBooleanNotPredicate",
            SigmaOp::ProveDlog => "ProveDlog",
            SigmaOp::ProveDhTuple => "ProveDHTuple",
            SigmaOp::Trivial => "TrivialProp",
        }
    }
}

impl fmt::Display for SigmaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(SigmaOp::And.code(), -106);
        assert_eq!(SigmaOp::Or.code(), -105);
        assert_eq!(SigmaOp::Threshold.code(), -104);
        assert_eq!(SigmaOp::Not.code(), -17);
        assert_eq!(SigmaOp::ProveDlog.code(), -51);
        assert_eq!(SigmaOp::ProveDhTuple.code(), -50);
        assert_eq!(SigmaOp::Trivial.code(), 0);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for op in SigmaOp::ALL {
            assert_eq!(SigmaOp::from_code(op.code() as i64), Some(op));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(SigmaOp::from_code(1), None);
        assert_eq!(SigmaOp::from_code(150), None);
        assert_eq!(SigmaOp::from_code(-1000), None);
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<i8> = SigmaOp::ALL.iter().map(|op| op.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), SigmaOp::ALL.len());
    }
}
