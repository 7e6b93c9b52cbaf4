//! Declarative validation rules
//!
//! Rules are attached to variables at composition time and re-applied by
//! the downstream configuration-management service against live values.
//! This module declares them and can evaluate them against a candidate
//! value; evaluation collects every violation instead of stopping at the
//! first, so one pass reports every broken constraint.

use super::errors::{SchemaError, SchemaResult};
use super::types::{Literal, ScalarType, Shape};

/// The constraint family a rule belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Element-wise lower bound
    CheckMin,
    /// Element-wise upper bound
    CheckMax,
    /// Runtime type tag must equal the declared type
    CheckType,
    /// Named constraint evaluated only by the downstream consumer
    Custom(String),
}

impl RuleKind {
    /// Rule name as emitted on the wire.
    pub fn wire_name(&self) -> &str {
        match self {
            RuleKind::CheckMin => "checkMin",
            RuleKind::CheckMax => "checkMax",
            RuleKind::CheckType => "checkType",
            RuleKind::Custom(name) => name,
        }
    }
}

/// A single violated constraint, reported per offending flat element.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The rule's declared message
    pub message: String,
    /// Flat (row-major) index of the offending element
    pub index: usize,
}

/// An immutable named constraint with shape-matched operands.
///
/// Operands are a literal sequence (possibly nested) or empty. A non-empty
/// operand set must flatten to either one value, broadcast across every
/// element of the owning variable, or exactly one value per element.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    kind: RuleKind,
    operands: Vec<Literal>,
    message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, operands: Vec<Literal>, message: impl Into<String>) -> Self {
        ValidationRule {
            kind,
            operands,
            message: message.into(),
        }
    }

    /// A `checkMin` rule with the given bound operands.
    pub fn check_min(operands: Vec<Literal>, message: impl Into<String>) -> Self {
        Self::new(RuleKind::CheckMin, operands, message)
    }

    /// A `checkMax` rule with the given bound operands.
    pub fn check_max(operands: Vec<Literal>, message: impl Into<String>) -> Self {
        Self::new(RuleKind::CheckMax, operands, message)
    }

    /// A `checkType` rule; carries no operands.
    pub fn check_type(message: impl Into<String>) -> Self {
        Self::new(RuleKind::CheckType, Vec::new(), message)
    }

    /// A consumer-defined rule, declared here and evaluated downstream.
    pub fn custom(
        name: impl Into<String>,
        operands: Vec<Literal>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(RuleKind::Custom(name.into()), operands, message)
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn operands(&self) -> &[Literal] {
        &self.operands
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn flat_operands(&self) -> Vec<&Literal> {
        self.operands.iter().flat_map(Literal::flatten).collect()
    }

    /// Verifies operand arity against the owning variable's shape at
    /// attachment time: empty, one broadcast value, or one per element.
    pub(crate) fn check_arity(&self, node: &str, shape: &Shape) -> SchemaResult<()> {
        let count = self.operands.iter().map(Literal::leaf_count).sum::<usize>();
        if count == 0 || count == 1 || count == shape.element_count() {
            return Ok(());
        }
        Err(SchemaError::rule_arity_mismatch(
            node,
            format!(
                "rule `{}` supplies {} operands for shape {} ({} elements)",
                self.kind.wire_name(),
                count,
                shape,
                shape.element_count()
            ),
        ))
    }

    /// Evaluates the rule against a candidate value.
    ///
    /// Pure: neither the rule nor the candidate is touched. `checkType`
    /// compares each leaf's runtime tag against the declared type; bound
    /// rules compare numerically, broadcasting a single operand across all
    /// candidate elements. Custom rules yield no violations here.
    pub fn evaluate(&self, declared: Option<ScalarType>, candidate: &Literal) -> Vec<Violation> {
        let leaves = candidate.flatten();
        match &self.kind {
            RuleKind::CheckType => {
                let Some(declared) = declared else {
                    return Vec::new();
                };
                leaves
                    .iter()
                    .enumerate()
                    .filter(|(_, leaf)| leaf.scalar_type() != Some(declared))
                    .map(|(index, _)| Violation {
                        message: self.message.clone(),
                        index,
                    })
                    .collect()
            }
            RuleKind::CheckMin => self.check_bound(&leaves, |v, bound| v < bound),
            RuleKind::CheckMax => self.check_bound(&leaves, |v, bound| v > bound),
            RuleKind::Custom(_) => Vec::new(),
        }
    }

    fn check_bound(&self, leaves: &[&Literal], broken: impl Fn(f64, f64) -> bool) -> Vec<Violation> {
        let bounds = self.flat_operands();
        if bounds.is_empty() {
            return Vec::new();
        }
        let mut violations = Vec::new();
        for (index, leaf) in leaves.iter().enumerate() {
            let bound = if bounds.len() == 1 {
                bounds[0]
            } else if let Some(b) = bounds.get(index) {
                *b
            } else {
                continue;
            };
            // Non-numeric leaves are checkType's concern.
            if let (Some(v), Some(b)) = (leaf.as_f64(), bound.as_f64()) {
                if broken(v, b) {
                    violations.push(Violation {
                        message: self.message.clone(),
                        index,
                    });
                }
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_max_scalar_bound() {
        let rule = ValidationRule::check_max(vec![Literal::doubles(&[180.0])], "Maximum allowed angle");
        let over = rule.evaluate(Some(ScalarType::Float32), &Literal::Float(200.0));
        assert_eq!(over.len(), 1);
        assert_eq!(over[0].message, "Maximum allowed angle");
        assert_eq!(over[0].index, 0);

        let under = rule.evaluate(Some(ScalarType::Float32), &Literal::Float(-90.0));
        assert!(under.is_empty());
    }

    #[test]
    fn test_check_max_per_element_bounds() {
        let rule = ValidationRule::check_max(
            vec![Literal::doubles(&[1.001, 1.001, 1.001, 1.001])],
            "Check the maximum value",
        );
        let pass = rule.evaluate(
            Some(ScalarType::Double),
            &Literal::doubles(&[0.8, 0.9, 1.0, 1.0]),
        );
        assert!(pass.is_empty());

        let fail = rule.evaluate(
            Some(ScalarType::Double),
            &Literal::doubles(&[1.2, 0.9, 1.0, 1.0]),
        );
        assert_eq!(fail.len(), 1);
        assert_eq!(fail[0].index, 0);
    }

    #[test]
    fn test_check_min_broadcasts_single_bound() {
        let rule = ValidationRule::check_min(vec![Literal::doubles(&[0.0])], "must be positive");
        let violations = rule.evaluate(
            Some(ScalarType::Double),
            &Literal::doubles(&[1.0, -2.0, 3.0, -4.0]),
        );
        let indices: Vec<usize> = violations.iter().map(|v| v.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_check_type_flags_tag_mismatch() {
        let rule = ValidationRule::check_type("Check the type");
        let ok = rule.evaluate(Some(ScalarType::Int32), &Literal::Int(5));
        assert!(ok.is_empty());

        let bad = rule.evaluate(Some(ScalarType::Int32), &Literal::Double(5.0));
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].message, "Check the type");
    }

    #[test]
    fn test_custom_rule_declared_not_evaluated() {
        let rule = ValidationRule::custom("checkRamp", vec![Literal::doubles(&[0.5])], "Ramp limit");
        assert!(rule
            .evaluate(Some(ScalarType::Double), &Literal::Double(100.0))
            .is_empty());
        assert_eq!(rule.kind().wire_name(), "checkRamp");
    }

    #[test]
    fn test_arity_check() {
        let shape = Shape::new("V", &[4]).unwrap();
        let single = ValidationRule::check_max(vec![Literal::doubles(&[1.0])], "m");
        assert!(single.check_arity("V", &shape).is_ok());

        let paired = ValidationRule::check_max(vec![Literal::doubles(&[1.0, 2.0, 3.0, 4.0])], "m");
        assert!(paired.check_arity("V", &shape).is_ok());

        let odd = ValidationRule::check_max(vec![Literal::doubles(&[1.0, 2.0, 3.0])], "m");
        assert!(odd.check_arity("V", &shape).is_err());
    }
}
