use std::f64::consts;

use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::ExprError;

/// Variables visible to a parametric expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vars {
    /// Normalized progress along the path in `[0, 1]`.
    pub t: f64,
    pub frequency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Var {
    T,
    Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Cbrt,
    Abs,
    Exp,
    Log,
    Log2,
    Log10,
    Floor,
    Ceil,
    Round,
    Trunc,
    Sign,
    Atan2,
    Pow,
    Hypot,
    Min,
    Max,
}

enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Func {
    fn lookup(name: &str) -> Option<Func> {
        let f = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "sqrt" => Func::Sqrt,
            "cbrt" => Func::Cbrt,
            "abs" => Func::Abs,
            "exp" => Func::Exp,
            "log" => Func::Log,
            "log2" => Func::Log2,
            "log10" => Func::Log10,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "trunc" => Func::Trunc,
            "sign" => Func::Sign,
            "atan2" => Func::Atan2,
            "pow" => Func::Pow,
            "hypot" => Func::Hypot,
            "min" => Func::Min,
            "max" => Func::Max,
            _ => return None,
        };
        Some(f)
    }

    fn arity(self) -> Arity {
        match self {
            Func::Atan2 | Func::Pow | Func::Hypot => Arity::Exact(2),
            Func::Min | Func::Max => Arity::AtLeast(1),
            _ => Arity::Exact(1),
        }
    }

    fn call(self, args: &[f64]) -> f64 {
        let a = args[0];
        match self {
            Func::Sin => a.sin(),
            Func::Cos => a.cos(),
            Func::Tan => a.tan(),
            Func::Asin => a.asin(),
            Func::Acos => a.acos(),
            Func::Atan => a.atan(),
            Func::Sinh => a.sinh(),
            Func::Cosh => a.cosh(),
            Func::Tanh => a.tanh(),
            Func::Sqrt => a.sqrt(),
            Func::Cbrt => a.cbrt(),
            Func::Abs => a.abs(),
            Func::Exp => a.exp(),
            Func::Log => a.ln(),
            Func::Log2 => a.log2(),
            Func::Log10 => a.log10(),
            Func::Floor => a.floor(),
            Func::Ceil => a.ceil(),
            // Halves round toward +inf.
            Func::Round => {
                if a < 0.0 && a - a.trunc() == -0.5 {
                    a.trunc()
                } else {
                    a.round()
                }
            }
            Func::Trunc => a.trunc(),
            Func::Sign => {
                if a > 0.0 {
                    1.0
                } else if a < 0.0 {
                    -1.0
                } else {
                    a
                }
            }
            Func::Atan2 => a.atan2(args[1]),
            Func::Pow => a.powf(args[1]),
            Func::Hypot => a.hypot(args[1]),
            Func::Min => args.iter().copied().fold(f64::INFINITY, js_min),
            Func::Max => args.iter().copied().fold(f64::NEG_INFINITY, js_max),
        }
    }
}

fn js_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.min(v)
    }
}

fn js_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

/// Resolved expression tree; names are bound, arities are checked.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Const(f64),
    Var(Var),
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Call {
        func: Func,
        args: Vec<Node>,
    },
}

impl Node {
    pub(crate) fn eval(&self, vars: &Vars) -> f64 {
        match self {
            Node::Const(v) => *v,
            Node::Var(Var::T) => vars.t,
            Node::Var(Var::Frequency) => vars.frequency,
            Node::Neg(inner) => -inner.eval(vars),
            Node::Binary { op, left, right } => op.apply(left.eval(vars), right.eval(vars)),
            Node::Call { func, args } => match args.as_slice() {
                [a] => func.call(&[a.eval(vars)]),
                [a, b] => func.call(&[a.eval(vars), b.eval(vars)]),
                _ => {
                    let values: Vec<f64> = args.iter().map(|a| a.eval(vars)).collect();
                    func.call(&values)
                }
            },
        }
    }
}

/// Strips an optional `Math.` namespace from a dotted path.
fn local_name(segments: &[String]) -> Option<&str> {
    match segments {
        [name] => Some(name.as_str()),
        [ns, name] if ns == "Math" => Some(name.as_str()),
        _ => None,
    }
}

pub(crate) fn resolve(expr: &Expr) -> Result<Node, ExprError> {
    match expr {
        Expr::Number(v) => Ok(Node::Const(*v)),
        Expr::Neg(inner) => Ok(Node::Neg(Box::new(resolve(inner)?))),
        Expr::Binary { op, left, right } => Ok(Node::Binary {
            op: *op,
            left: Box::new(resolve(left)?),
            right: Box::new(resolve(right)?),
        }),
        Expr::Path { segments, offset } => {
            let node = match (segments.as_slice(), local_name(segments)) {
                ([name], _) if name == "t" => Node::Var(Var::T),
                ([name], _) if name == "frequency" => Node::Var(Var::Frequency),
                (_, Some("PI")) => Node::Const(consts::PI),
                (_, Some("E")) => Node::Const(consts::E),
                (_, Some("LN2")) => Node::Const(consts::LN_2),
                (_, Some("LN10")) => Node::Const(consts::LN_10),
                (_, Some("SQRT2")) => Node::Const(consts::SQRT_2),
                _ => {
                    return Err(ExprError::new(
                        *offset,
                        format!("unknown identifier '{}'", segments.join(".")),
                    ));
                }
            };
            Ok(node)
        }
        Expr::Call {
            callee,
            args,
            offset,
        } => {
            let name = callee.join(".");
            let func = local_name(callee)
                .and_then(Func::lookup)
                .ok_or_else(|| ExprError::new(*offset, format!("unknown function '{name}'")))?;
            let ok = match func.arity() {
                Arity::Exact(n) => args.len() == n,
                Arity::AtLeast(n) => args.len() >= n,
            };
            if !ok {
                return Err(ExprError::new(
                    *offset,
                    format!("wrong number of arguments to '{name}': {}", args.len()),
                ));
            }
            let args = args.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Call { func, args })
        }
    }
}
