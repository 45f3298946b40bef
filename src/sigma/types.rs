//! SigmaBoolean variant family
//!
//! A closed sum type over the proof-expression node kinds. All values are
//! immutable once built: "adding" a child consumes the node and returns a
//! new one. Equality and hashing are structural and derived, so two nodes of
//! different variants are never equal and child order is significant.

use super::op::SigmaOp;

/// A boolean proof expression node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SigmaBoolean {
    /// Conjunction of children
    And(AndPredicate),
    /// Disjunction of children
    Or(OrPredicate),
    /// At least `k` of the children
    Threshold(ThresholdPredicate),
    /// Negation of a single child
    Not(NotPredicate),
    /// Knowledge of a discrete logarithm
    ProveDlog(ProveDlog),
    /// Knowledge of a Diffie-Hellman tuple exponent
    ProveDhTuple(ProveDhTuple),
    /// Constant true/false proposition
    Trivial(TrivialProp),
}

impl SigmaBoolean {
    /// Conjunction over `args`
    pub fn and(args: Vec<SigmaBoolean>) -> Self {
        AndPredicate::new(args).into()
    }

    /// Disjunction over `args`
    pub fn or(args: Vec<SigmaBoolean>) -> Self {
        OrPredicate::new(args).into()
    }

    /// `k`-out-of-`args.len()` threshold
    pub fn threshold(k: u8, args: Vec<SigmaBoolean>) -> Self {
        ThresholdPredicate::new(k, args).into()
    }

    /// Negation of `arg`
    pub fn not(arg: SigmaBoolean) -> Self {
        NotPredicate::new(arg).into()
    }

    /// Discrete log leaf over the hex-encoded group element `h`
    pub fn prove_dlog(h: impl Into<String>) -> Self {
        ProveDlog::new(h).into()
    }

    /// Diffie-Hellman tuple leaf over four hex-encoded group elements
    pub fn prove_dh_tuple(
        g: impl Into<String>,
        h: impl Into<String>,
        u: impl Into<String>,
        v: impl Into<String>,
    ) -> Self {
        ProveDhTuple::new(g, h, u, v).into()
    }

    /// Constant leaf
    pub fn trivial(condition: bool) -> Self {
        TrivialProp::new(condition).into()
    }

    /// Returns the discriminator opcode of this node
    pub fn op(&self) -> SigmaOp {
        match self {
            SigmaBoolean::And(_) => SigmaOp::And,
            SigmaBoolean::Or(_) => SigmaOp::Or,
            SigmaBoolean::Threshold(_) => SigmaOp::Threshold,
            SigmaBoolean::Not(_) => SigmaOp::Not,
            SigmaBoolean::ProveDlog(_) => SigmaOp::ProveDlog,
            SigmaBoolean::ProveDhTuple(_) => SigmaOp::ProveDhTuple,
            SigmaBoolean::Trivial(_) => SigmaOp::Trivial,
        }
    }

    /// Returns the class name used in the display rendering
    pub fn class_name(&self) -> &'static str {
        self.op().class_name()
    }

    /// Returns the direct children of this node (empty for leaves)
    pub fn children(&self) -> &[SigmaBoolean] {
        match self {
            SigmaBoolean::And(p) => p.args(),
            SigmaBoolean::Or(p) => p.args(),
            SigmaBoolean::Threshold(p) => p.args(),
            SigmaBoolean::Not(p) => std::slice::from_ref(p.arg()),
            SigmaBoolean::ProveDlog(_)
            | SigmaBoolean::ProveDhTuple(_)
            | SigmaBoolean::Trivial(_) => &[],
        }
    }

    /// Whether this node has no children by construction
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            SigmaBoolean::ProveDlog(_) | SigmaBoolean::ProveDhTuple(_) | SigmaBoolean::Trivial(_)
        )
    }

    /// Total number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(SigmaBoolean::node_count).sum::<usize>()
    }

    /// Nesting depth; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(SigmaBoolean::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Conjunction node: true iff every child is true
///
/// `args` is never absent; a default-built predicate has no children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AndPredicate {
    args: Vec<SigmaBoolean>,
}

impl AndPredicate {
    /// Creates a conjunction over `args`, kept in the given order
    pub fn new(args: Vec<SigmaBoolean>) -> Self {
        Self { args }
    }

    /// Starts an empty builder
    pub fn builder() -> AndPredicateBuilder {
        AndPredicateBuilder::default()
    }

    /// Operands in order
    pub fn args(&self) -> &[SigmaBoolean] {
        &self.args
    }

    /// Consumes the node, returning its operands
    pub fn into_args(self) -> Vec<SigmaBoolean> {
        self.args
    }

    /// Returns a copy of this node with `args` replaced
    pub fn with_args(self, args: Vec<SigmaBoolean>) -> Self {
        Self { args }
    }

    /// Returns this node with `arg` appended after the existing operands
    pub fn with_arg(mut self, arg: SigmaBoolean) -> Self {
        self.args.push(arg);
        self
    }
}

/// Builder for [`AndPredicate`]
#[derive(Debug, Default)]
pub struct AndPredicateBuilder {
    args: Vec<SigmaBoolean>,
}

impl AndPredicateBuilder {
    /// Appends one operand
    pub fn arg(mut self, arg: impl Into<SigmaBoolean>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several operands, preserving their order
    pub fn args(mut self, args: impl IntoIterator<Item = SigmaBoolean>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn build(self) -> AndPredicate {
        AndPredicate::new(self.args)
    }
}

/// Disjunction node: true iff at least one child is true
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrPredicate {
    args: Vec<SigmaBoolean>,
}

impl OrPredicate {
    pub fn new(args: Vec<SigmaBoolean>) -> Self {
        Self { args }
    }

    pub fn builder() -> OrPredicateBuilder {
        OrPredicateBuilder::default()
    }

    pub fn args(&self) -> &[SigmaBoolean] {
        &self.args
    }

    pub fn into_args(self) -> Vec<SigmaBoolean> {
        self.args
    }

    pub fn with_args(self, args: Vec<SigmaBoolean>) -> Self {
        Self { args }
    }

    pub fn with_arg(mut self, arg: SigmaBoolean) -> Self {
        self.args.push(arg);
        self
    }
}

/// Builder for [`OrPredicate`]
#[derive(Debug, Default)]
pub struct OrPredicateBuilder {
    args: Vec<SigmaBoolean>,
}

impl OrPredicateBuilder {
    pub fn arg(mut self, arg: impl Into<SigmaBoolean>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = SigmaBoolean>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn build(self) -> OrPredicate {
        OrPredicate::new(self.args)
    }
}

/// Threshold node: true iff at least `k` children are true
///
/// `k` is not checked against `args.len()` at construction; the decoder
/// checks it when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThresholdPredicate {
    k: u8,
    args: Vec<SigmaBoolean>,
}

impl ThresholdPredicate {
    pub fn new(k: u8, args: Vec<SigmaBoolean>) -> Self {
        Self { k, args }
    }

    /// Starts an empty builder for a `k`-of-n threshold
    pub fn builder(k: u8) -> ThresholdPredicateBuilder {
        ThresholdPredicateBuilder {
            k,
            args: Vec::new(),
        }
    }

    pub fn k(&self) -> u8 {
        self.k
    }

    pub fn args(&self) -> &[SigmaBoolean] {
        &self.args
    }

    pub fn into_args(self) -> Vec<SigmaBoolean> {
        self.args
    }

    pub fn with_args(self, args: Vec<SigmaBoolean>) -> Self {
        Self { k: self.k, args }
    }

    pub fn with_arg(mut self, arg: SigmaBoolean) -> Self {
        self.args.push(arg);
        self
    }

    /// Whether `k` can be met by the available children
    pub fn is_satisfiable(&self) -> bool {
        usize::from(self.k) <= self.args.len()
    }
}

/// Builder for [`ThresholdPredicate`]
#[derive(Debug)]
pub struct ThresholdPredicateBuilder {
    k: u8,
    args: Vec<SigmaBoolean>,
}

impl ThresholdPredicateBuilder {
    pub fn arg(mut self, arg: impl Into<SigmaBoolean>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = SigmaBoolean>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn build(self) -> ThresholdPredicate {
        ThresholdPredicate::new(self.k, self.args)
    }
}

/// Negation of a single child
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotPredicate {
    arg: Box<SigmaBoolean>,
}

impl NotPredicate {
    pub fn new(arg: SigmaBoolean) -> Self {
        Self { arg: Box::new(arg) }
    }

    pub fn arg(&self) -> &SigmaBoolean {
        &self.arg
    }

    pub fn into_arg(self) -> SigmaBoolean {
        *self.arg
    }
}

/// Proof of knowledge of `x` such that `g^x = h`
///
/// `h` is the hex encoding of a compressed group element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProveDlog {
    h: String,
}

impl ProveDlog {
    pub fn new(h: impl Into<String>) -> Self {
        Self { h: h.into() }
    }

    pub fn h(&self) -> &str {
        &self.h
    }
}

/// Proof that `(g, h, u, v)` is a Diffie-Hellman tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProveDhTuple {
    g: String,
    h: String,
    u: String,
    v: String,
}

impl ProveDhTuple {
    pub fn new(
        g: impl Into<String>,
        h: impl Into<String>,
        u: impl Into<String>,
        v: impl Into<String>,
    ) -> Self {
        Self {
            g: g.into(),
            h: h.into(),
            u: u.into(),
            v: v.into(),
        }
    }

    pub fn g(&self) -> &str {
        &self.g
    }

    pub fn h(&self) -> &str {
        &self.h
    }

    pub fn u(&self) -> &str {
        &self.u
    }

    pub fn v(&self) -> &str {
        &self.v
    }
}

/// Constant proposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrivialProp {
    condition: bool,
}

impl TrivialProp {
    pub fn new(condition: bool) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> bool {
        self.condition
    }
}

impl From<AndPredicate> for SigmaBoolean {
    fn from(p: AndPredicate) -> Self {
        SigmaBoolean::And(p)
    }
}

impl From<OrPredicate> for SigmaBoolean {
    fn from(p: OrPredicate) -> Self {
        SigmaBoolean::Or(p)
    }
}

impl From<ThresholdPredicate> for SigmaBoolean {
    fn from(p: ThresholdPredicate) -> Self {
        SigmaBoolean::Threshold(p)
    }
}

impl From<NotPredicate> for SigmaBoolean {
    fn from(p: NotPredicate) -> Self {
        SigmaBoolean::Not(p)
    }
}

impl From<ProveDlog> for SigmaBoolean {
    fn from(p: ProveDlog) -> Self {
        SigmaBoolean::ProveDlog(p)
    }
}

impl From<ProveDhTuple> for SigmaBoolean {
    fn from(p: ProveDhTuple) -> Self {
        SigmaBoolean::ProveDhTuple(p)
    }
}

impl From<TrivialProp> for SigmaBoolean {
    fn from(p: TrivialProp) -> Self {
        SigmaBoolean::Trivial(p)
    }
}
