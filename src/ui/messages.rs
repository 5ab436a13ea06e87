use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_RED: &str = "\x1b[31m";

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}❌ {}{}", FG_RED, BOLD, RESET, msg);
}

/// Section title followed by a verbatim block of text.
pub fn section<T: fmt::Display>(title: &str, body: T) {
    println!("{}{}{}:{}", FG_BLUE, BOLD, title, RESET);
    println!("{}", body);
}
