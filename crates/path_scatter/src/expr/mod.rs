//! Sandboxed arithmetic expressions for parametric paths.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := postfix (('^' | '**') unary)?
//! postfix := primary ('.' ident | '(' args ')')*
//! primary := number | ident | '(' expr ')'
//! ```
//!
//! The only names in scope are `t`, `frequency`, the constants `PI`, `E`, `LN2`, `LN10`,
//! `SQRT2` and the usual math functions, each optionally prefixed with `Math.`. Nothing
//! else can be reached from an expression.
use std::fmt;

mod ast;
mod compile;
mod lexer;
mod parser;

pub use compile::Vars;

/// Failure to compile or evaluate an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprError {
    /// Byte offset into the source where the problem was detected.
    pub offset: usize,
    pub message: String,
}

impl ExprError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expr error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ExprError {}

/// A parsed and name-resolved expression, ready for repeated evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    source: String,
    root: compile::Node,
}

impl CompiledExpr {
    /// Parses `source` and binds every identifier and function call.
    pub fn compile(source: &str) -> Result<Self, ExprError> {
        let ast = parser::parse_expr(source)?;
        let root = compile::resolve(&ast)?;
        Ok(Self {
            source: source.to_owned(),
            root,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression. A NaN or infinite result is reported as an error.
    pub fn eval(&self, vars: &Vars) -> Result<f64, ExprError> {
        let value = self.root.eval(vars);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExprError::new(
                0,
                format!(
                    "'{}' evaluated to {value} at t={}",
                    self.source, vars.t
                ),
            ))
        }
    }
}
