use std::{
    env::args_os,
    fs,
    io::{stdin, IsTerminal, self},
    path::Path,
    process::ExitCode,
};

use rangutan::parser::Parser;
use rangutan::scanner::Scanner;
use rangutan::token::TokenKind;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{error::ReadlineError, Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, KeyEvent, Movement, RepeatCount};
use rustyline::{Completer, Editor, Helper, Highlighter, Hinter, Validator};
use std::error::Error;

fn main() -> ExitCode {
    if args_os().len() > 2 {
        eprintln!("usage: rangutan [file]");
        return ExitCode::FAILURE;
    }

    if let Some(arg) = args_os().nth(1) {
        run_file(Path::new(&arg));
    } else {
        return if run_prompt().is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    ExitCode::SUCCESS
}

fn run_file(path: &Path) {
    let content = fs::read_to_string(path).expect("Error reading file.");
    run(content.as_str());
}

// Prints the token stream first (the shell is a scanner debugging aid), then
// either the reconstructed program or the collected parse errors.
fn run(code: &str) {
    let mut scanner = Scanner::new(code);
    loop {
        let tok = scanner.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        println!("{:?} {:?}", tok.kind, tok.literal);
    }

    let mut parser = Parser::new(Scanner::new(code));
    let program = parser.parse_program();
    if parser.errors().is_empty() {
        println!("{}", program);
    } else {
        for err in parser.errors() {
            println!("parse error: {}", err);
        }
    }
}

struct TabEventHandler;
impl ConditionalEventHandler for TabEventHandler {
    fn handle(&self, _: &Event, _n: RepeatCount, _: bool, _: &EventContext) -> Option<Cmd> {
        Some(Cmd::Indent(Movement::WholeLine))
    }
}

#[derive(Helper, Completer, Hinter, Highlighter, Validator)]
struct MyHelper {
    #[rustyline(Completer)]
    completer: (),
    #[rustyline(Validator)]
    validator: MatchingBracketValidator,
}

fn run_prompt() -> Result<(), Box<dyn Error>> {
    if !stdin().is_terminal() {
        let program = io::read_to_string(stdin().lock())?;
        run(program.as_str());
        return Ok(());
    }

    println!("Welcome to Rangutan");

    let h = MyHelper {
        completer: (),
        validator: MatchingBracketValidator::new(),
    };
    let mut rl = Editor::new()?;
    rl.set_helper(Some(h));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabEventHandler)),
    );

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                run(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => {
                break Err(Box::new(err));
            }
        }
    }
}
