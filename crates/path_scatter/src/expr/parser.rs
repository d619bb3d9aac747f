use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::lexer::{lex, Token, TokenKind};
use crate::expr::ExprError;

/// Deepest nesting the parser accepts. Every parenthesis, unary sign, power and chained
/// binary operand counts one level, which keeps the resulting tree shallow enough to
/// resolve, evaluate and drop recursively.
pub(crate) const MAX_DEPTH: usize = 256;

pub(crate) fn parse_expr(src: &str) -> Result<Expr, ExprError> {
    let tokens = lex(src)?;
    let mut p = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    if p.peek().kind == TokenKind::Eof {
        return Err(ExprError::new(0, "empty expression"));
    }
    let expr = p.parse_additive()?;
    p.expect(TokenKind::Eof)?;
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        // Eof is never consumed past.
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ExprError> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(ExprError::new(
                self.peek().offset,
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn descend(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::new(
                self.peek().offset,
                format!("expression nested deeper than {MAX_DEPTH} levels"),
            ));
        }
        Ok(())
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, ExprError> {
        let depth = self.depth;
        let mut e = self.parse_multiplicative()?;
        loop {
            let op = if self.consume(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.consume(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            self.descend()?;
            let r = self.parse_multiplicative()?;
            e = binary(op, e, r);
        }
        self.depth = depth;
        Ok(e)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ExprError> {
        let depth = self.depth;
        let mut e = self.parse_unary()?;
        loop {
            let op = if self.consume(TokenKind::Star) {
                BinaryOp::Mul
            } else if self.consume(TokenKind::Slash) {
                BinaryOp::Div
            } else if self.consume(TokenKind::Percent) {
                BinaryOp::Rem
            } else {
                break;
            };
            self.descend()?;
            let r = self.parse_unary()?;
            e = binary(op, e, r);
        }
        self.depth = depth;
        Ok(e)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        self.descend()?;
        let e = self.parse_signed();
        self.depth -= 1;
        e
    }

    fn parse_signed(&mut self) -> Result<Expr, ExprError> {
        if self.consume(TokenKind::Minus) {
            let e = self.parse_unary()?;
            return Ok(Expr::Neg(Box::new(e)));
        }
        if self.consume(TokenKind::Plus) {
            return self.parse_unary();
        }
        self.parse_power()
    }

    /// Right-associative `^` / `**`, binding tighter than unary minus.
    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_postfix()?;
        if self.consume(TokenKind::Caret) || self.consume(TokenKind::StarStar) {
            let exp = self.parse_unary()?;
            return Ok(binary(BinaryOp::Pow, base, exp));
        }
        Ok(base)
    }

    fn parse_postfix(&mut self) -> Result<Expr, ExprError> {
        let mut e = self.parse_primary()?;

        loop {
            if self.consume(TokenKind::Dot) {
                let t = self.bump();
                let name = match t.kind {
                    TokenKind::Ident(s) => s,
                    other => {
                        return Err(ExprError::new(
                            t.offset,
                            format!("expected identifier after '.', found {other:?}"),
                        ));
                    }
                };
                e = match e {
                    Expr::Path {
                        mut segments,
                        offset,
                    } => {
                        segments.push(name);
                        Expr::Path { segments, offset }
                    }
                    _ => {
                        return Err(ExprError::new(
                            t.offset,
                            "member access base must be an identifier path",
                        ));
                    }
                };
                continue;
            }

            if self.peek().kind == TokenKind::LParen {
                let paren = self.bump().offset;
                let args = self.parse_args()?;
                e = match e {
                    Expr::Path { segments, offset } => Expr::Call {
                        callee: segments,
                        args,
                        offset,
                    },
                    _ => {
                        return Err(ExprError::new(
                            paren,
                            "call target must be an identifier path",
                        ));
                    }
                };
                continue;
            }

            break;
        }

        Ok(e)
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut args = Vec::new();
        if self.consume(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_additive()?);
            if self.consume(TokenKind::Comma) {
                continue;
            }
            self.expect(TokenKind::RParen)?;
            return Ok(args);
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let t = self.bump();
        match t.kind {
            TokenKind::Number(v) => Ok(Expr::Number(v)),
            TokenKind::Ident(s) => Ok(Expr::Path {
                segments: vec![s],
                offset: t.offset,
            }),
            TokenKind::LParen => {
                let e = self.parse_additive()?;
                self.expect(TokenKind::RParen)?;
                Ok(e)
            }
            other => Err(ExprError::new(
                t.offset,
                format!("unexpected token {other:?}"),
            )),
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arithmetic_precedence() {
        let e = parse_expr("1 + 2 * 3").unwrap();
        match e {
            Expr::Binary {
                op: BinaryOp::Add,
                right,
                ..
            } => assert!(matches!(
                *right,
                Expr::Binary {
                    op: BinaryOp::Mul,
                    ..
                }
            )),
            other => panic!("unexpected ast: {other:?}"),
        }
    }

    #[test]
    fn power_is_right_associative() {
        let e = parse_expr("2 ^ 3 ^ 2").unwrap();
        match e {
            Expr::Binary {
                op: BinaryOp::Pow,
                left,
                right,
            } => {
                assert_eq!(*left, Expr::Number(2.0));
                assert!(matches!(
                    *right,
                    Expr::Binary {
                        op: BinaryOp::Pow,
                        ..
                    }
                ));
            }
            other => panic!("unexpected ast: {other:?}"),
        }
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let e = parse_expr("-t^2").unwrap();
        assert!(matches!(e, Expr::Neg(inner) if matches!(*inner, Expr::Binary { op: BinaryOp::Pow, .. })));
    }

    #[test]
    fn parses_dotted_calls() {
        let e = parse_expr("Math.sin(t * 2)").unwrap();
        match e {
            Expr::Call { callee, args, .. } => {
                assert_eq!(callee, vec!["Math".to_owned(), "sin".to_owned()]);
                assert_eq!(args.len(), 1);
            }
            other => panic!("unexpected ast: {other:?}"),
        }
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = parse_expr("t * 600 - 300 )").unwrap_err();
        assert_eq!(err.offset, 14);
    }

    #[test]
    fn deep_nesting_is_an_error_not_a_crash() {
        let parens = format!("{}t{}", "(".repeat(5000), ")".repeat(5000));
        let err = parse_expr(&parens).unwrap_err();
        assert!(err.message.contains("nested deeper"));

        assert!(parse_expr(&format!("{}t", "-".repeat(200_000))).is_err());
        assert!(parse_expr(&format!("t{}", "^t".repeat(5000))).is_err());
        assert!(parse_expr(&format!("t{}", " + t".repeat(5000))).is_err());
        assert!(parse_expr(&format!("{}t{}", "sin(".repeat(5000), ")".repeat(5000))).is_err());
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let parens = format!("{}t{}", "(".repeat(100), ")".repeat(100));
        assert!(parse_expr(&parens).is_ok());
        assert!(parse_expr(&format!("t{}", " + t".repeat(100))).is_ok());
        assert!(parse_expr(&format!("{}t", "-".repeat(100))).is_ok());
    }

    #[test]
    fn rejects_empty_and_dangling_input() {
        assert!(parse_expr("").is_err());
        assert!(parse_expr("   ").is_err());
        assert!(parse_expr("t *").is_err());
        assert!(parse_expr("sin(t").is_err());
    }
}
