// Interpreter for generated matcher text, used by the emitter tests to check
// what the emitted code does instead of only how it looks.

#[derive(Debug, Clone, Copy)]
enum Cond {
    Peek(char),
    PeekNext(char),
}

#[derive(Debug)]
enum Stmt {
    Advance,
    Assign(String),
    Block(Vec<Stmt>),
    If {
        conds: Vec<Cond>,
        then: Vec<Stmt>,
        otherwise: Vec<Stmt>,
    },
}

#[derive(Debug, Default)]
pub struct Outcome {
    /// Right-hand sides of every assignment executed, in order.
    pub tokens: Vec<String>,
    /// Characters consumed by `AdvanceChars()`.
    pub consumed: usize,
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    peeked: usize,
}

impl Cursor<'_> {
    fn at(&self, i: usize) -> char {
        self.input.get(i).map(|&b| b as char).unwrap_or('\0')
    }

    fn peek_char(&mut self) -> char {
        self.peeked = 0;
        self.at(self.pos)
    }

    fn peek_next_char(&mut self) -> char {
        self.peeked += 1;
        self.at(self.pos + self.peeked)
    }

    fn advance(&mut self) {
        self.pos += self.peeked + 1;
        self.peeked = 0;
    }
}

/// A parsed `switch` body: one statement list per `case`.
#[derive(Debug)]
pub struct Matcher {
    cases: Vec<(char, Vec<Stmt>)>,
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &'a str {
        self.lines.get(self.pos).copied().unwrap_or("")
    }

    fn next(&mut self) -> &'a str {
        let line = self.peek();
        self.pos += 1;
        line
    }

    fn expect(&mut self, expected: &str) {
        let line = self.next();
        assert_eq!(line, expected, "line {}", self.pos);
    }

    fn stmts_until(&mut self, end: &str) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while self.peek() != end {
            assert!(self.pos < self.lines.len(), "missing {end:?}");
            stmts.push(self.stmt());
        }
        self.next();
        stmts
    }

    fn block(&mut self) -> Vec<Stmt> {
        self.expect("{");
        self.stmts_until("}")
    }

    fn stmt(&mut self) -> Stmt {
        let line = self.peek();
        if line == "AdvanceChars();" {
            self.next();
            Stmt::Advance
        } else if line == "{" {
            Stmt::Block(self.block())
        } else if line.starts_with("if (") {
            self.next();
            self.if_stmt(line)
        } else if let Some((_, rhs)) = line.split_once(" = ") {
            self.next();
            Stmt::Assign(rhs.trim_end_matches(';').to_owned())
        } else {
            panic!("unexpected line {}: {line:?}", self.pos + 1)
        }
    }

    fn cond(line: &str) -> (Cond, bool) {
        let (cond, rest) = if let Some(rest) = line.strip_prefix("if (PeekChar() == '") {
            (Cond::Peek as fn(char) -> Cond, rest)
        } else if let Some(rest) = line.strip_prefix("&& PeekNextChar() == '") {
            (Cond::PeekNext as fn(char) -> Cond, rest)
        } else {
            panic!("not a condition: {line:?}")
        };
        let mut chars = rest.chars();
        let c = chars.next().unwrap();
        let tail = chars.as_str();
        assert!(tail == "'" || tail == "')", "bad condition tail: {line:?}");
        (cond(c), tail.ends_with(')'))
    }

    fn if_stmt(&mut self, head: &str) -> Stmt {
        let (first, mut closed) = Self::cond(head);
        let mut conds = vec![first];
        while !closed {
            let (c, end) = Self::cond(self.next());
            conds.push(c);
            closed = end;
        }
        let then = self.block();
        let otherwise = match self.peek() {
            "else" => {
                self.next();
                self.block()
            }
            line if line.starts_with("else if (") => {
                self.next();
                vec![self.if_stmt(&line["else ".len()..])]
            }
            _ => Vec::new(),
        };
        Stmt::If {
            conds,
            then,
            otherwise,
        }
    }
}

impl Matcher {
    /// Parses generated matcher lines, skipping comments and blank lines.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines = lines
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty() && !l.starts_with("//"))
            .collect();
        let mut parser = Parser { lines, pos: 0 };
        let mut cases = Vec::new();
        while parser.pos < parser.lines.len() {
            let head = parser.next();
            let c = head
                .strip_prefix("case '")
                .and_then(|rest| rest.strip_suffix("':"))
                .and_then(|c| c.chars().next())
                .unwrap_or_else(|| panic!("expected case label, got {head:?}"));
            cases.push((c, parser.stmts_until("break;")));
        }
        Self { cases }
    }

    /// Runs the `switch` on `input` from its first character.
    pub fn run(&self, input: &str) -> Outcome {
        let mut cursor = Cursor {
            input: input.as_bytes(),
            pos: 0,
            peeked: 0,
        };
        let mut outcome = Outcome::default();
        let c = cursor.peek_char();
        if let Some((_, stmts)) = self.cases.iter().find(|(k, _)| *k == c) {
            exec(stmts, &mut cursor, &mut outcome);
        }
        outcome.consumed = cursor.pos;
        outcome
    }
}

fn exec(stmts: &[Stmt], cursor: &mut Cursor<'_>, outcome: &mut Outcome) {
    for stmt in stmts {
        match stmt {
            Stmt::Advance => cursor.advance(),
            Stmt::Assign(token) => outcome.tokens.push(token.clone()),
            Stmt::Block(body) => exec(body, cursor, outcome),
            Stmt::If {
                conds,
                then,
                otherwise,
            } => {
                let matched = conds.iter().all(|cond| match *cond {
                    Cond::Peek(c) => cursor.peek_char() == c,
                    Cond::PeekNext(c) => cursor.peek_next_char() == c,
                });
                if matched {
                    exec(then, cursor, outcome);
                } else {
                    exec(otherwise, cursor, outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interprets_hand_written_switch() {
        let lines = [
            "case '#':",
            "\tAdvanceChars();",
            "\tif (PeekChar() == '#')",
            "\t{",
            "\t\tAdvanceChars();",
            "\t\tkind = HashHash;",
            "\t}",
            "\telse",
            "\t{",
            "\t\tkind = Hash;",
            "\t}",
            "\tbreak;",
        ];
        let matcher = Matcher::parse(&lines);
        let outcome = matcher.run("##x");
        assert_eq!(outcome.tokens, ["HashHash"]);
        assert_eq!(outcome.consumed, 2);
        let outcome = matcher.run("#x");
        assert_eq!(outcome.tokens, ["Hash"]);
        assert_eq!(outcome.consumed, 1);
        assert!(matcher.run("x").tokens.is_empty());
    }

    #[test]
    fn chained_peeks_advance_together() {
        let lines = [
            "case '.':",
            "\tif (PeekChar() == '.'",
            "\t\t&& PeekNextChar() == '.'",
            "\t\t&& PeekNextChar() == '.')",
            "\t{",
            "\t\tAdvanceChars();",
            "\t\tkind = Ellipsis;",
            "\t}",
            "\tbreak;",
        ];
        let matcher = Matcher::parse(&lines);
        let outcome = matcher.run("...");
        assert_eq!(outcome.tokens, ["Ellipsis"]);
        assert_eq!(outcome.consumed, 3);
        assert_eq!(matcher.run("..").consumed, 0);
    }
}
