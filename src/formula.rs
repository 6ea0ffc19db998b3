//! The α-CTL formula syntax tree (§3).

use std::fmt;

/// An α-CTL formula. Negation is restricted to atomic arguments — the parser enforces this at
/// construction time (see [crate::preprocessing::parser]) rather than the evaluator normalizing
/// arbitrary negations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// The constant `true`, satisfied by every state.
    True,
    /// An atomic proposition, or a ground compound term treated atomically by identity.
    Prop(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Ex(Box<Formula>),
    Ax(Box<Formula>),
    Eu(Box<Formula>, Box<Formula>),
    Au(Box<Formula>, Box<Formula>),
    Ef(Box<Formula>),
    Af(Box<Formula>),
    Eg(Box<Formula>),
    Ag(Box<Formula>),
}

impl Formula {
    /// Whether this formula is atomic (`true` or a proposition) — the only shape `not` may wrap.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::True | Formula::Prop(_))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => write!(f, "true"),
            Formula::Prop(name) => write!(f, "{name}"),
            Formula::Not(phi) => write!(f, "not({phi})"),
            Formula::And(l, r) => write!(f, "and({l}, {r})"),
            Formula::Or(l, r) => write!(f, "or({l}, {r})"),
            Formula::Ex(phi) => write!(f, "ex({phi})"),
            Formula::Ax(phi) => write!(f, "ax({phi})"),
            Formula::Eu(l, r) => write!(f, "eu({l}, {r})"),
            Formula::Au(l, r) => write!(f, "au({l}, {r})"),
            Formula::Ef(phi) => write!(f, "ef({phi})"),
            Formula::Af(phi) => write!(f, "af({phi})"),
            Formula::Eg(phi) => write!(f, "eg({phi})"),
            Formula::Ag(phi) => write!(f, "ag({phi})"),
        }
    }
}
