use crate::token::TokenKind;
use std::fmt::{self, Display};
use std::rc::Rc;

pub type ExprRef = Box<Expr>;

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Let(Rc<str>, Expr),
    Return(Expr),
    Expr(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Ident(Rc<str>),
    Int(i64),
    Bool(bool),
    Prefix(TokenKind, ExprRef),
    Infix(TokenKind, ExprRef, ExprRef),
    If {
        cond: ExprRef,
        consequence: Block,
        alternative: Option<Block>,
    },
    Function {
        params: Vec<Rc<str>>,
        body: Block,
    },
    Call {
        callee: ExprRef,
        args: Vec<Expr>,
    },
}

/// Brace-delimited statement sequence, as in `if`/`fn` bodies.
#[derive(Debug, PartialEq, Clone)]
pub struct Block(pub Vec<Stmt>);

/// Root of a parse. Statement order is source order and the evaluator relies
/// on it being preserved exactly.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Stmt {
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let(..) => "let".into(),
            Self::Return(_) => "return".into(),
            Self::Expr(e) => e.token_literal(),
        }
    }
}

impl Expr {
    /// Literal text of the token this expression started at.
    pub fn token_literal(&self) -> String {
        match self {
            Self::Ident(name) => name.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Prefix(op, _) => op.to_string(),
            Self::Infix(op, ..) => op.to_string(),
            Self::If { .. } => "if".into(),
            Self::Function { .. } => "fn".into(),
            Self::Call { .. } => "(".into(),
        }
    }
}

// Display reconstructs source text with every prefix/infix operation fully
// parenthesized, so re-parsing the rendered string yields the same tree
// shape. Used by the precedence tests and for debugging.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{}", name),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Prefix(op, operand) => write!(f, "({}{})", op, operand),
            Self::Infix(op, left, right) => write!(f, "({} {} {})", left, op, right),
            Self::If {
                cond,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", cond, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, " else {}", alt)?;
                }
                Ok(())
            }
            Self::Function { params, body } => {
                write!(f, "fn({}) {}", params.join(", "), body)
            }
            Self::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", callee, args)
            }
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(name, value) => write!(f, "let {} = {};", name, value),
            Self::Return(value) => write!(f, "return {};", value),
            Self::Expr(value) => write!(f, "{}", value),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for stmt in self.0.iter() {
            write!(f, "{} ", stmt)?;
        }
        write!(f, "}}")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.statements.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
