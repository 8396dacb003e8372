use super::error::CompileError;

use std::iter::Peekable;
use std::str::Chars;

const STAR: char = '*';
const COLON: char = ':';
const OPEN: char = '(';
const CLOSE: char = ')';

const SEGMENT: &str = "([^/?]+)";
const WILDCARD: &str = r"([\s\S]+)";
const QUERY_TAIL: &str = r"(?:\?([\s\S]*))?$";

pub(super) const WILDCARD_NAME: &str = "path";

#[derive(Debug)]
pub(super) struct Translation {
    pub(super) rule: String,
    pub(super) names: Vec<Box<str>>,
}

struct Translator<'p> {
    pattern: &'p str,
    rule: String,
    literal: String,
    names: Vec<Box<str>>,
    depth: usize,
    wildcard: bool,
}

pub(super) fn translate(pattern: &str) -> Result<Translation, CompileError> {
    let mut t = Translator::new(pattern);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            OPEN => t.open(),
            CLOSE => t.close()?,
            STAR => t.wildcard()?,
            COLON => {
                let name = take_word(&mut chars);
                if name.is_empty() {
                    t.literal.push(COLON);
                } else {
                    t.segment(name);
                }
            }
            _ => t.literal.push(c),
        }
    }

    t.finish()
}

impl<'p> Translator<'p> {
    fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            rule: String::with_capacity(pattern.len() * 2 + QUERY_TAIL.len() + 1),
            literal: String::new(),
            names: Vec::new(),
            depth: 0,
            wildcard: false,
        }
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.rule.push_str(&regex::escape(&self.literal));
            self.literal.clear();
        }
    }

    fn open(&mut self) {
        self.flush_literal();
        self.rule.push_str("(?:");
        self.depth += 1;
    }

    fn close(&mut self) -> Result<(), CompileError> {
        if self.depth == 0 {
            return Err(self.unbalanced());
        }
        self.flush_literal();
        self.rule.push_str(")?");
        self.depth -= 1;
        Ok(())
    }

    fn wildcard(&mut self) -> Result<(), CompileError> {
        if self.wildcard {
            return Err(CompileError::MultipleWildcards {
                pattern: self.pattern.into(),
            });
        }
        self.flush_literal();
        self.rule.push_str(WILDCARD);
        self.names.push(WILDCARD_NAME.into());
        self.wildcard = true;
        Ok(())
    }

    fn segment(&mut self, name: String) {
        self.flush_literal();
        self.rule.push_str(SEGMENT);
        self.names.push(name.into_boxed_str());
    }

    fn finish(mut self) -> Result<Translation, CompileError> {
        if self.depth != 0 {
            return Err(self.unbalanced());
        }
        self.flush_literal();

        let mut rule = String::with_capacity(self.rule.len() + QUERY_TAIL.len() + 1);
        rule.push('^');
        rule.push_str(&self.rule);
        rule.push_str(QUERY_TAIL);

        Ok(Translation {
            rule,
            names: self.names,
        })
    }

    fn unbalanced(&self) -> CompileError {
        CompileError::UnbalancedGroup {
            pattern: self.pattern.into(),
        }
    }
}

fn take_word(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut word = String::new();
    while let Some(&c) = chars.peek() {
        if !is_word_char(c) {
            break;
        }
        word.push(c);
        chars.next();
    }
    word
}

#[inline(always)]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
