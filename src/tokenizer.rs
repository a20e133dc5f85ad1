use std::fmt;
use std::io::{self, BufRead};

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A run of word characters: keyword, number or anything in between.
    Word(String),
    LeftParen,
    RightParen,
    Comma,
    /// Any other character outside the word set, returned on its own.
    Other(char),
    Eof,
}

impl Token {
    pub fn is_word(&self, word: &str) -> bool {
        match self {
            Token::Word(w) => w.eq_ignore_ascii_case(word),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "'{}'", word),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Comma => f.write_str("','"),
            Token::Other(c) => write!(f, "'{}'", c),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

enum CharClass {
    Whitespace,
    Comment,
    Word,
    Ordinary,
}

fn classify(c: char) -> CharClass {
    match c {
        '\u{0}'..=' ' => CharClass::Whitespace,
        '#' => CharClass::Comment,
        c if is_word_char(c) => CharClass::Word,
        _ => CharClass::Ordinary,
    }
}

/// Letters, digits, `-`, `+`, `.` and everything from U+00A0 up.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '+' || c == '.' || c >= '\u{a0}'
}

/// Numbers and keywords share the word class, so whether a word is a number
/// is decided here and only here: it must start like a number and parse as
/// a finite `f64`.  Signed spellings of infinity and NaN are rejected along
/// with the bare ones.
pub fn parse_number(word: &str) -> Option<f64> {
    let first = word.chars().next()?;
    if !(first.is_ascii_digit() || first == '-' || first == '+' || first == '.') {
        return None;
    }
    word.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Splits a character stream into [`Token`]s, one line at a time, with a
/// single token of pushback.
pub struct Tokenizer<R> {
    reader: R,
    chars: Vec<char>,
    cursor: usize,
    lines_read: usize,
    token_line: usize,
    pushed_back: Option<Token>,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            reader,
            chars: Vec::new(),
            cursor: 0,
            lines_read: 0,
            token_line: 1,
            pushed_back: None,
        }
    }

    /// 1-based line of the most recently returned token.
    pub fn line(&self) -> usize {
        self.token_line
    }

    pub fn next_token(&mut self) -> io::Result<Token> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }
        loop {
            let c = match self.next_char()? {
                Some(c) => c,
                None => return Ok(Token::Eof),
            };
            self.token_line = self.lines_read;
            match classify(c) {
                CharClass::Whitespace => continue,
                CharClass::Comment => {
                    self.skip_comment();
                    continue;
                }
                CharClass::Word => return Ok(Token::Word(self.read_word(c))),
                CharClass::Ordinary => {
                    return Ok(match c {
                        '(' => Token::LeftParen,
                        ')' => Token::RightParen,
                        ',' => Token::Comma,
                        other => Token::Other(other),
                    })
                }
            }
        }
    }

    /// Return `token` from the next call to [`Tokenizer::next_token`].  Only
    /// one token can be held; pushing back twice drops the first.
    pub fn push_back(&mut self, token: Token) {
        self.pushed_back = Some(token);
    }

    pub fn peek_token(&mut self) -> io::Result<Token> {
        let token = self.next_token()?;
        self.push_back(token.clone());
        Ok(token)
    }

    fn read_word(&mut self, first: char) -> String {
        let mut word = String::new();
        word.push(first);
        // Newlines are whitespace, so a word never spans lines.
        while let Some(&c) = self.chars.get(self.cursor) {
            if !is_word_char(c) {
                break;
            }
            word.push(c);
            self.cursor += 1;
        }
        word
    }

    /// Stops before the line terminator so a lone `\r` still counts.
    fn skip_comment(&mut self) {
        while let Some(&c) = self.chars.get(self.cursor) {
            if c == '\n' || c == '\r' {
                break;
            }
            self.cursor += 1;
        }
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        while self.cursor >= self.chars.len() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;
            self.chars = line.chars().collect();
            self.cursor = 0;
        }
        let c = self.chars[self.cursor];
        self.cursor += 1;
        // `read_line` splits on `\n` only; a `\r` not followed by `\n` ends a
        // line as well.
        if c == '\r' && self.chars.get(self.cursor) != Some(&'\n') {
            self.lines_read += 1;
        }
        Ok(Some(c))
    }
}
