//! Human-readable rendering of SigmaBoolean trees
//!
//! Output is deterministic and multi-line, meant for logs and debugging,
//! never for transport. Every nested rendering has its continuation lines
//! shifted right by four spaces:
//!
//! ```text
//! class SigmaBooleanAndPredicate {
//!     class SigmaBoolean {
//!         op: -106
//!     }
//!     args: [class TrivialProp {
//!         class SigmaBoolean {
//!             op: 0
//!         }
//!         condition: true
//!     }]
//! }
//! ```

use std::fmt;

use super::op::SigmaOp;
use super::types::{
    AndPredicate, NotPredicate, OrPredicate, ProveDhTuple, ProveDlog, SigmaBoolean,
    ThresholdPredicate, TrivialProp,
};

const INDENT: &str = "    ";

/// Shifts every line after the first by one indentation level.
fn indented(s: &str) -> String {
    s.replace('\n', &format!("\n{}", INDENT))
}

/// Renders the base-type block shared by every variant.
fn base(op: SigmaOp) -> String {
    format!("class SigmaBoolean {{\n{}op: {}\n}}", INDENT, op.code())
}

fn list(items: &[SigmaBoolean]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

fn render(
    f: &mut fmt::Formatter<'_>,
    op: SigmaOp,
    fields: &[(&str, String)],
) -> fmt::Result {
    writeln!(f, "class {} {{", op.class_name())?;
    writeln!(f, "{}{}", INDENT, indented(&base(op)))?;
    for (name, value) in fields {
        writeln!(f, "{}{}: {}", INDENT, name, indented(value))?;
    }
    write!(f, "}}")
}

impl fmt::Display for SigmaBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigmaBoolean::And(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::Or(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::Threshold(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::Not(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::ProveDlog(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::ProveDhTuple(p) => fmt::Display::fmt(p, f),
            SigmaBoolean::Trivial(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl fmt::Display for AndPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, SigmaOp::And, &[("args", list(self.args()))])
    }
}

impl fmt::Display for OrPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, SigmaOp::Or, &[("args", list(self.args()))])
    }
}

impl fmt::Display for ThresholdPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            SigmaOp::Threshold,
            &[("k", self.k().to_string()), ("args", list(self.args()))],
        )
    }
}

impl fmt::Display for NotPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, SigmaOp::Not, &[("arg", self.arg().to_string())])
    }
}

impl fmt::Display for ProveDlog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, SigmaOp::ProveDlog, &[("h", self.h().to_string())])
    }
}

impl fmt::Display for ProveDhTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            SigmaOp::ProveDhTuple,
            &[
                ("g", self.g().to_string()),
                ("h", self.h().to_string()),
                ("u", self.u().to_string()),
                ("v", self.v().to_string()),
            ],
        )
    }
}

impl fmt::Display for TrivialProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(
            f,
            SigmaOp::Trivial,
            &[("condition", self.condition().to_string())],
        )
    }
}
