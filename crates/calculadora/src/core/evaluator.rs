//! AST evaluator and the display-text entry point

use tracing::debug;

use crate::core::operations::negate;
use crate::core::parser::{AstNode, Parser};
use crate::core::{Evaluation, EvalResult, Value};

/// Maps the keypad's display glyphs onto the tokenizer's operators.
///
/// `x` becomes `*` and `^` becomes `**`; everything else passes through.
#[must_use]
pub fn translate_glyphs(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        match ch {
            'x' => out.push('*'),
            '^' => out.push_str("**"),
            other => out.push(other),
        }
    }
    out
}

/// Evaluates buffer text into a displayable outcome
#[must_use]
pub fn evaluate(input: &str) -> Evaluation {
    Evaluator::new().evaluate_display(input)
}

/// Evaluator for calculator expressions.
///
/// Stateless: every call tokenizes, parses and reduces from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node
    pub fn evaluate_ast(&self, node: &AstNode) -> EvalResult<Value> {
        match node {
            AstNode::Number(value) => Ok(*value),
            AstNode::Negate(inner) => negate(self.evaluate_ast(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let lhs = self.evaluate_ast(left)?;
                let rhs = self.evaluate_ast(right)?;
                op.apply(lhs, rhs)
            }
        }
    }

    /// Translates glyphs, parses and evaluates buffer text
    pub fn evaluate(&self, input: &str) -> EvalResult<Value> {
        let translated = translate_glyphs(input);
        let ast = Parser::parse_str(&translated)?;
        self.evaluate_ast(&ast)
    }

    /// Evaluates buffer text, folding failures into the error outcome
    #[must_use]
    pub fn evaluate_display(&self, input: &str) -> Evaluation {
        let outcome = Evaluation::from(self.evaluate(input));
        match &outcome {
            Evaluation::Value(value) => debug!(expression = input, %value, "evaluated"),
            Evaluation::Error(err) => debug!(expression = input, error = %err, "evaluation failed"),
        }
        outcome
    }
}
