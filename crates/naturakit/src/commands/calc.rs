//! Arithmetic calculator command
//!
//! Input is gated by a character whitelist, then evaluated with a small
//! recursive-descent parser over f64. Anything the parser cannot
//! consume completely is "Invalid expression." - the console never
//! exposes parser internals to the player.

use std::iter::Peekable;
use std::str::Chars;

use async_trait::async_trait;
use regex::Regex;

use super::{Command, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

const INVALID_MSG: &str = "Invalid expression.\n";

/// The calc command - evaluate an arithmetic expression.
///
/// Usage: calc EXPRESSION
///
/// Supports + - * /, parentheses, and decimal literals.
pub struct Calc;

#[async_trait]
impl Command for Calc {
    async fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        if ctx.args.is_empty() {
            return Ok(ExecResult::err("Usage: calc [expression]\n", 1));
        }

        let expr = ctx.args.join(" ");
        if !is_safe_expression(&expr) {
            return Ok(ExecResult::err(INVALID_MSG, 1));
        }

        match evaluate(&expr) {
            Some(value) => Ok(ExecResult::ok(format!(
                "{} = {}\n",
                expr,
                format_value(value)
            ))),
            None => Ok(ExecResult::err(INVALID_MSG, 1)),
        }
    }
}

/// Only digits, the four operators, parentheses, dots, and whitespace
/// may appear. Everything else is rejected before parsing.
fn is_safe_expression(expr: &str) -> bool {
    Regex::new(r"^[0-9+\-*/().\s]+$")
        .map(|re| re.is_match(expr))
        .unwrap_or(false)
}

/// Evaluate the whole expression, or `None` if any of it is malformed.
/// Division blow-ups (inf/NaN) read as bad input too.
fn evaluate(expr: &str) -> Option<f64> {
    let mut parser = Parser {
        chars: expr.chars().peekable(),
    };
    let value = parser.expression()?;
    parser.skip_ws();
    if parser.chars.peek().is_some() {
        return None;
    }
    if !value.is_finite() {
        return None;
    }
    Some(value)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    value += self.term()?;
                }
                Some('-') => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => return Some(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some('*') => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.chars.next();
                    value /= self.factor()?;
                }
                _ => return Some(value),
            }
        }
    }

    // factor := ('+' | '-') factor | '(' expression ')' | number
    fn factor(&mut self) -> Option<f64> {
        self.skip_ws();
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                Some(-self.factor()?)
            }
            Some('+') => {
                self.chars.next();
                self.factor()
            }
            Some('(') => {
                self.chars.next();
                let value = self.expression()?;
                self.skip_ws();
                match self.chars.next() {
                    Some(')') => Some(value),
                    _ => None,
                }
            }
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Option<f64> {
        let mut buf = String::new();
        while matches!(self.chars.peek(), Some(c) if c.is_ascii_digit() || *c == '.') {
            buf.push(self.chars.next()?);
        }
        if buf.is_empty() {
            return None;
        }
        buf.parse().ok()
    }
}
