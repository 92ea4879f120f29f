use serde::{Deserialize, Serialize};
use std::fmt;

/// How the predicates of a requirement are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequirementOperator {
    #[default]
    All,
    Any,
}

/// A typed condition checked by the runtime before a gated child runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Predicate {
    HealthBelow { fraction: f64 },
    HasStatus { status: String },
    Chance { probability: f64 },
    ResourceAtLeast { resource: String, amount: f64 },
    Not { predicate: Box<Predicate> },
}

/// The expression held by a Requirement node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementExpr {
    #[serde(default)]
    pub operator: RequirementOperator,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
}

impl RequirementExpr {
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Self {
            operator: RequirementOperator::All,
            predicates,
        }
    }

    pub fn any(predicates: Vec<Predicate>) -> Self {
        Self {
            operator: RequirementOperator::Any,
            predicates,
        }
    }

    /// An expression with no predicates: ALL of nothing always passes, ANY of nothing never does.
    pub fn is_trivial(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::HealthBelow { fraction } => write!(f, "health < {}", fraction),
            Predicate::HasStatus { status } => write!(f, "has {}", status),
            Predicate::Chance { probability } => write!(f, "chance {}", probability),
            Predicate::ResourceAtLeast { resource, amount } => {
                write!(f, "{} >= {}", resource, amount)
            }
            Predicate::Not { predicate } => write!(f, "NOT ({})", predicate),
        }
    }
}

impl fmt::Display for RequirementExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.operator {
            RequirementOperator::All => "ALL",
            RequirementOperator::Any => "ANY",
        };
        write!(f, "{}(", op)?;
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", predicate)?;
        }
        f.write_str(")")
    }
}
