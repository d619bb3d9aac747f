#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        /// Dotted callee, e.g. `["Math", "sin"]` or `["sin"]`.
        callee: Vec<String>,
        args: Vec<Expr>,
        offset: usize,
    },
    /// A dotted identifier path: `t`, `frequency`, `Math.PI`.
    Path { segments: Vec<String>, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    #[inline]
    pub(crate) fn apply(self, l: f64, r: f64) -> f64 {
        match self {
            BinaryOp::Add => l + r,
            BinaryOp::Sub => l - r,
            BinaryOp::Mul => l * r,
            BinaryOp::Div => l / r,
            BinaryOp::Rem => l % r,
            BinaryOp::Pow => l.powf(r),
        }
    }
}
