use rangutan::ast::{Block, Expr, Program, Stmt};
use rangutan::token::TokenKind;

#[test]
fn program_renders_source() {
    let program = Program {
        statements: vec![Stmt::Let("x".into(), Expr::Ident("y".into()))],
    };

    assert_eq!(program.to_string(), "let x = y;");
}

#[test]
fn return_renders_source() {
    let program = Program {
        statements: vec![Stmt::Return(Expr::Int(5))],
    };

    assert_eq!(program.to_string(), "return 5;");
}

#[test]
fn nested_expressions_fully_parenthesized() {
    let sum = Expr::Infix(
        TokenKind::Plus,
        Box::new(Expr::Ident("a".into())),
        Box::new(Expr::Prefix(TokenKind::Minus, Box::new(Expr::Int(2)))),
    );

    assert_eq!(sum.to_string(), "(a + (-2))");
}

#[test]
fn function_renders_source() {
    let func = Expr::Function {
        params: vec!["x".into(), "y".into()],
        body: Block(vec![Stmt::Return(Expr::Infix(
            TokenKind::Asterisk,
            Box::new(Expr::Ident("x".into())),
            Box::new(Expr::Ident("y".into())),
        ))]),
    };

    assert_eq!(func.to_string(), "fn(x, y) { return (x * y); }");
}

#[test]
fn token_literals() {
    let stmt = Stmt::Let("x".into(), Expr::Int(1));
    assert_eq!(stmt.token_literal(), "let");

    let stmt = Stmt::Expr(Expr::Ident("foo".into()));
    assert_eq!(stmt.token_literal(), "foo");

    let expr = Expr::If {
        cond: Box::new(Expr::Bool(true)),
        consequence: Block(vec![]),
        alternative: None,
    };
    assert_eq!(expr.token_literal(), "if");
}
