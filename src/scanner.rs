use crate::token::{lookup_ident, Token, TokenKind};

/// On-demand tokenizer. `next_token` hands out one token per call and settles
/// on `Eof` forever once the input runs out; a byte that matches no token
/// shape becomes an `Illegal` token rather than an error.
pub struct Scanner {
    // TODO: Sucky string representation given that we never peek further than
    // one char ahead, but it will have to do.
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        let mut scanner = Scanner {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        scanner.read_char();
        scanner
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.ch.is_some_and(|c| is_letter(c) || c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let tok = match self.ch {
            None => Token::new(TokenKind::Eof, ""),
            Some('=') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            Some('!') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            Some('+') => Token::new(TokenKind::Plus, "+"),
            Some('-') => Token::new(TokenKind::Minus, "-"),
            Some('*') => Token::new(TokenKind::Asterisk, "*"),
            Some('/') => Token::new(TokenKind::Slash, "/"),
            Some('<') => Token::new(TokenKind::Lt, "<"),
            Some('>') => Token::new(TokenKind::Gt, ">"),
            Some(',') => Token::new(TokenKind::Comma, ","),
            Some(';') => Token::new(TokenKind::Semicolon, ";"),
            Some('(') => Token::new(TokenKind::LParen, "("),
            Some(')') => Token::new(TokenKind::RParen, ")"),
            Some('{') => Token::new(TokenKind::LBrace, "{"),
            Some('}') => Token::new(TokenKind::RBrace, "}"),
            Some(c) if is_letter(c) => {
                // read_identifier leaves the cursor on the first char past the
                // run, so skip the shared read_char below.
                let word = self.read_identifier();
                return Token::new(lookup_ident(&word), word);
            }
            Some(c) if c.is_ascii_digit() => {
                return Token::new(TokenKind::Int, self.read_number());
            }
            Some(c) => Token::new(TokenKind::Illegal, c.to_string()),
        };

        self.read_char();
        tok
    }
}
