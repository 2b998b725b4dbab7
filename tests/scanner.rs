use rangutan::scanner::Scanner;
use rangutan::token::TokenKind;

fn check(input: &str, expected: &[(TokenKind, &str)]) {
    let mut scanner = Scanner::new(input);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let tok = scanner.next_token();
        assert_eq!(tok.kind, *kind, "token {} of {:?}", i, input);
        assert_eq!(&*tok.literal, *literal, "token {} of {:?}", i, input);
    }
}

#[test]
fn symbols() {
    check(
        "=+(){},;",
        &[
            (TokenKind::Assign, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn single_char_tokens_then_eof() {
    let singles = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Bang, "!"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Lt, "<"),
        (TokenKind::Gt, ">"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
    ];

    for (kind, literal) in singles {
        check(literal, &[(kind, literal), (TokenKind::Eof, "")]);
    }
}

#[test]
fn two_char_operators() {
    check(
        "== !=",
        &[
            (TokenKind::Eq, "=="),
            (TokenKind::NotEq, "!="),
            (TokenKind::Eof, ""),
        ],
    );

    // One token each, not two single-char tokens.
    check("==", &[(TokenKind::Eq, "=="), (TokenKind::Eof, "")]);
    check("!=", &[(TokenKind::NotEq, "!="), (TokenKind::Eof, "")]);
}

#[test]
fn assignments() {
    check(
        "let five = 5; let ten = 10;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "ten"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn whitespace_ignored() {
    check(
        "

let   x    =    5    ;
",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn functions() {
    check(
        "let add = fn(x,y) { x + y; }; let result = add(five, ten);",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fn"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "result"),
            (TokenKind::Assign, "="),
            (TokenKind::Ident, "add"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "five"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "ten"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn keywords_and_operators() {
    check(
        "!-/*5; 5 < 10 > 5; if (5 < 10) { return true; } else { return false; } 10 == 10; 10 != 9;",
        &[
            (TokenKind::Bang, "!"),
            (TokenKind::Minus, "-"),
            (TokenKind::Slash, "/"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::Gt, ">"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::Int, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::Int, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Int, "10"),
            (TokenKind::Eq, "=="),
            (TokenKind::Int, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Int, "10"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Int, "9"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn underscored_identifiers() {
    check(
        "let _foo_bar2 = 1;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "_foo_bar2"),
            (TokenKind::Assign, "="),
            (TokenKind::Int, "1"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn illegal_characters() {
    check(
        "let a @ $ 5;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "a"),
            (TokenKind::Illegal, "@"),
            (TokenKind::Illegal, "$"),
            (TokenKind::Int, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ],
    );
}

#[test]
fn empty_input_is_eof() {
    let mut scanner = Scanner::new("");
    let tok = scanner.next_token();
    assert_eq!(tok.kind, TokenKind::Eof);
    assert_eq!(&*tok.literal, "");
}

#[test]
fn eof_forever() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token().kind, TokenKind::Ident);
    for _ in 0..10 {
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }
}
