//! The multi-step pipeline behind `/olympiad/advanced`.
//!
//! A pipeline threads a running [`Value`] through a list of [`StepRequest`]s. Each step may
//! replace the value with a freshly parsed expression, then applies its [`Operation`] to it.
//! `solve` turns the value into a list of solutions; every later operation is applied to each
//! solution in turn.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use cas_compute::numerical::evalf;
use cas_compute::symbolic::{
    derivative,
    expand,
    factor,
    integrate,
    simplify,
    solve,
    substitute,
    SymExpr,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::input::{parse_expression, parse_substitutions, parse_symbol};

/// An operation a pipeline step can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Simplify,
    Solve,
    Substitute,
    Expand,
    Factor,
    Differentiate,
    Integrate,
    Evaluate,
}

impl Operation {
    /// The name clients use for the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::Solve => "solve",
            Self::Substitute => "substitute",
            Self::Expand => "expand",
            Self::Factor => "factor",
            Self::Differentiate => "differentiate",
            Self::Integrate => "integrate",
            Self::Evaluate => "evaluate",
        }
    }

    /// Returns true if the operation works with respect to a variable.
    pub fn uses_variable(self) -> bool {
        matches!(self, Self::Solve | Self::Differentiate | Self::Integrate)
    }

    /// Applies the operation to a single expression.
    pub fn apply_expr(self, expr: &SymExpr, ctx: &Context) -> Result<Value, cas_compute::Error> {
        let var = ctx.variable.as_str();
        Ok(Value::Expr(match self {
            Self::Simplify => simplify(expr),
            Self::Solve => return Ok(Value::List(solve(expr, var)?)),
            Self::Substitute => substitute(expr, &ctx.substitutions),
            Self::Expand => expand(expr)?,
            Self::Factor => factor(expr),
            Self::Differentiate => derivative(expr, var)?,
            Self::Integrate => integrate(expr, var)?,
            Self::Evaluate => evalf(expr)?,
        }))
    }

    /// Applies the operation to the running value. A list is mapped element-wise; solving each
    /// element of a list gathers all of the solutions into one list.
    pub fn apply(self, value: Value, ctx: &Context) -> AppResult<Value> {
        match value {
            Value::None => Err(AppError::NoExpression(self)),
            Value::Expr(expr) => Ok(self.apply_expr(&expr, ctx)?),
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in &items {
                    match self.apply_expr(item, ctx)? {
                        Value::List(solutions) => out.extend(solutions),
                        Value::Expr(expr) => out.push(expr),
                        Value::None => {},
                    }
                }
                Ok(Value::List(out))
            },
        }
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "simplify" => Self::Simplify,
            "solve" => Self::Solve,
            "substitute" => Self::Substitute,
            "expand" => Self::Expand,
            "factor" => Self::Factor,
            "differentiate" => Self::Differentiate,
            "integrate" => Self::Integrate,
            "evaluate" => Self::Evaluate,
            other => return Err(AppError::UnknownOperation(other.to_string())),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The arguments an operation needs besides the expression itself.
#[derive(Debug, Clone)]
pub struct Context {
    /// The variable to solve for, differentiate or integrate with respect to.
    pub variable: String,

    /// The replacements made by `substitute`.
    pub substitutions: Vec<(String, SymExpr)>,
}

impl Context {
    /// A context with the given variable and no substitutions.
    pub fn new(variable: impl Into<String>) -> Self {
        Self { variable: variable.into(), substitutions: Vec::new() }
    }
}

/// The running value of a pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No expression has been given yet.
    #[default]
    None,

    /// A single expression.
    Expr(SymExpr),

    /// The solutions produced by `solve`.
    List(Vec<SymExpr>),
}

impl Value {
    /// Returns the expressions held by the value.
    pub fn into_vec(self) -> Vec<SymExpr> {
        match self {
            Self::None => Vec::new(),
            Self::Expr(expr) => vec![expr],
            Self::List(items) => items,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Expr(expr) => write!(f, "{}", expr),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            },
        }
    }
}

fn default_variable() -> String {
    "x".to_string()
}

/// One step of a pipeline, as sent by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct StepRequest {
    /// The name of the [`Operation`] to apply.
    pub operation: String,

    /// If present and non-empty, replaces the running value before the operation is applied.
    #[serde(default)]
    pub expression: Option<String>,

    #[serde(default = "default_variable")]
    pub variable: String,

    /// Symbol names mapped to the expressions that replace them.
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}

/// Runs every step in order and returns the final value.
pub fn run(steps: &[StepRequest]) -> AppResult<Value> {
    let mut value = Value::None;

    for (index, step) in steps.iter().enumerate() {
        if let Some(input) = step.expression.as_deref().filter(|input| !input.is_empty()) {
            value = Value::Expr(parse_expression(input)?);
        }

        let operation = step.operation.parse::<Operation>()?;
        let ctx = Context {
            variable: if operation.uses_variable() {
                parse_symbol(&step.variable)?.to_string()
            } else {
                step.variable.clone()
            },
            substitutions: match operation {
                Operation::Substitute => parse_substitutions(&step.substitutions)?,
                _ => Vec::new(),
            },
        };

        value = operation.apply(value, &ctx)?;
        tracing::debug!(step = index, %operation, %value, "Applied pipeline step");
    }

    Ok(value)
}
