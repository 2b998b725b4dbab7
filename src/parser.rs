use crate::ast::{Block, Expr, Program, Stmt};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

use rustc_hash::FxHashMap;
use std::rc::Rc;
use std::{fmt, fmt::Display, mem};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    NoPrefixRule(TokenKind),
    BadIntLiteral(Rc<str>),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {}, got {} instead", expected, got)
            }
            Self::NoPrefixRule(kind) => {
                write!(f, "no prefix parse function for {} found", kind)
            }
            Self::BadIntLiteral(text) => {
                write!(f, "could not parse {:?} as integer", text)
            }
        }
    }
}

/// Binding strength, weakest first. Derived `Ord` gives the strict total
/// order the climbing loop compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

// Closed set of handlers for tokens that continue an expression.
enum InfixRule {
    Binary,
    Call,
}

fn infix_rule(kind: TokenKind) -> Option<InfixRule> {
    match kind {
        TokenKind::LParen => Some(InfixRule::Call),
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Asterisk
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Gt => Some(InfixRule::Binary),
        _ => None,
    }
}

/// Two-token-lookahead Pratt parser. Malformed statements land in the error
/// list instead of aborting the parse; the top-level loop resynchronizes and
/// keeps going so one pass reports as many problems as possible.
pub struct Parser {
    scanner: Scanner,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
    precedences: FxHashMap<TokenKind, Precedence>,
}

impl Parser {
    pub fn new(mut scanner: Scanner) -> Parser {
        let cur = scanner.next_token();
        let peek = scanner.next_token();

        let precedences = FxHashMap::from_iter([
            (TokenKind::Eq, Precedence::Equals),
            (TokenKind::NotEq, Precedence::Equals),
            (TokenKind::Lt, Precedence::LessGreater),
            (TokenKind::Gt, Precedence::LessGreater),
            (TokenKind::Plus, Precedence::Sum),
            (TokenKind::Minus, Precedence::Sum),
            (TokenKind::Slash, Precedence::Product),
            (TokenKind::Asterisk, Precedence::Product),
            (TokenKind::LParen, Precedence::Call),
        ]);

        Parser {
            scanner,
            cur,
            peek,
            errors: Vec::new(),
            precedences,
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn advance(&mut self) {
        self.cur = mem::replace(&mut self.peek, self.scanner.next_token());
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected: kind,
                got: self.peek.kind,
            });
            false
        }
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedences
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    // Parsing the actual grammar.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.advance();
        }
        program
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.cur.literal.clone();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Let(name, value))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Return(value))
    }

    // The trailing semicolon is optional so a bare trailing expression works
    // at the prompt.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Expr(value))
    }

    /// Precedence climbing: fold infix rules onto `left` while the upcoming
    /// operator binds strictly tighter than `precedence`. Strictly-greater
    /// comparison is what makes equal-precedence operators left-associative.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.precedence_of(self.peek.kind)
        {
            let Some(rule) = infix_rule(self.peek.kind) else {
                break;
            };
            self.advance();
            left = match rule {
                InfixRule::Binary => self.parse_infix_expression(left)?,
                InfixRule::Call => self.parse_call_expression(left)?,
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur.kind {
            TokenKind::Ident => Some(Expr::Ident(self.cur.literal.clone())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True => Some(Expr::Bool(true)),
            TokenKind::False => Some(Expr::Bool(false)),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixRule(kind));
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.cur.literal.parse() {
            Ok(n) => Some(Expr::Int(n)),
            Err(_) => {
                self.errors
                    .push(ParseError::BadIntLiteral(self.cur.literal.clone()));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let op = self.cur.kind;
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix(op, Box::new(operand)))
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let op = self.cur.kind;
        let precedence = self.precedence_of(op);
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix(op, Box::new(left), Box::new(right)))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let cond = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If {
            cond: Box::new(cond),
            consequence,
            alternative,
        })
    }

    // Called with `cur` on the opening brace; leaves `cur` on the closing
    // brace (or Eof if the block was never closed).
    fn parse_block(&mut self) -> Block {
        let mut statements = Vec::new();
        self.advance();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        Block(statements)
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::Function { params, body })
    }

    fn parse_function_params(&mut self) -> Option<Vec<Rc<str>>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(self.cur.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(self.cur.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(params)
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let mut args = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
        } else {
            self.advance();
            args.push(self.parse_expression(Precedence::Lowest)?);

            while self.peek_is(TokenKind::Comma) {
                self.advance();
                self.advance();
                args.push(self.parse_expression(Precedence::Lowest)?);
            }

            if !self.expect_peek(TokenKind::RParen) {
                return None;
            }
        }

        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }
}
