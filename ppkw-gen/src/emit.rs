//! Code emission.
//!
//! The [`Emitter`] turns a [`KeywordSet`] into declaration lines and a
//! [`Trie`] into the body of a `switch` statement that recognises every
//! keyword one character at a time. Rendering is pure: every method returns
//! the generated lines, and [`write_lines`] is the only place that touches a
//! sink.
//!
//! The generated matcher relies on three cursor primitives of the host lexer:
//!
//! * `PeekChar()` returns the current character and resets the peek offset,
//! * `PeekNextChar()` bumps the peek offset and returns the character there,
//! * `AdvanceChars()` consumes everything peeked so far plus one character.
//!
//! Runs of single-child nodes are collapsed into one condition chained with
//! `&&`, so `{"pragma"}` becomes a single `if` instead of five nested blocks.
//! When a keyword is a strict prefix of another one (`if` / `ifdef`) the
//! longer candidates are tested first and the shorter keyword is assigned in
//! the trailing `else` arm.

use crate::{KeywordSet, Trie, TrieNode};
use std::io::{self, Write};

const DEFAULT_BANNER: &[&str] = &[
    "// $$***************************************************************$$ //",
    "//                                                                     //",
    "//        Keyword matcher produced by the PPKW trie generator.         //",
    "//                                                                     //",
    "// $$***************************************************************$$ //",
];

const GENERATED_WARNING: &[&str] = &[
    "// $$***************************************************************$$ //",
    "//                                                                     //",
    "//   THIS FILE IS AUTOMATICALLY GENERATED. ANY CHANGES WOULD BE DISCARDED //",
    "//                                                                     //",
    "// $$***************************************************************$$ //",
];

/// Textual details of the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Macro invoked once per keyword in the declaration list.
    pub macro_name: String,
    /// Lvalue receiving the recognised token type.
    pub token_target: String,
    /// Prepended to the keyword to form the token type, e.g. `...::Kw_`.
    pub token_prefix: String,
    pub peek_char: String,
    pub peek_next_char: String,
    /// Full statement advancing the input cursor.
    pub advance: String,
    /// Comment block placed at the top of every generated file.
    pub banner: Vec<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            macro_name: "PPKEYWORD".to_owned(),
            token_target: "tokenInfo.Type".to_owned(),
            token_prefix: "ASyntaxLexeme::Type::Kw_".to_owned(),
            peek_char: "PeekChar()".to_owned(),
            peek_next_char: "PeekNextChar()".to_owned(),
            advance: "AdvanceChars();".to_owned(),
            banner: DEFAULT_BANNER.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

/// Position of a recursive [`Emitter::render_internal`] call.
#[derive(Debug, Clone)]
struct Context {
    /// Keyword spelled by the path from the root to the current node.
    prefix: String,
    /// Indentation level, in tabs.
    depth: usize,
    /// The enclosing code ended the previous condition, so the first child
    /// must open a fresh `if` instead of chaining onto it.
    force_new_chain: bool,
}

impl Context {
    fn top(c: char) -> Self {
        Self {
            prefix: c.to_string(),
            depth: 1,
            force_new_chain: true,
        }
    }

    fn descend(&self, c: char, depth: usize) -> Self {
        let mut prefix = self.prefix.clone();
        prefix.push(c);
        Self {
            prefix,
            depth,
            force_new_chain: false,
        }
    }
}

/// Renders declaration lists and trie matchers.
///
/// ```rust
/// # use ppkw_gen::{Emitter, KeywordSet, Trie};
/// let keywords = KeywordSet::new(["if", "ifdef"]).unwrap();
/// let emitter = Emitter::default();
/// let decls = emitter.render_declarations(keywords.iter());
/// assert_eq!(decls, ["PPKEYWORD (if, i, f)", "PPKEYWORD (ifdef, i, f, d, e, f)"]);
///
/// let matcher = emitter.render_matcher(&Trie::from(&keywords));
/// assert!(matcher.contains(&"case 'i':".to_owned()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    config: EmitConfig,
}

impl Emitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// One `MACRO (name, c0, c1, ...)` line per keyword, in the order given.
    pub fn render_declarations<'a, I>(&self, keywords: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keywords
            .into_iter()
            .map(|keyword| {
                let chars: Vec<String> = keyword.chars().map(String::from).collect();
                format!("{} ({}, {})", self.config.macro_name, keyword, chars.join(", "))
            })
            .collect()
    }

    /// The declaration list as a standalone include file: banner, a no-op
    /// default for the macro, the declarations, and an `#undef`.
    pub fn render_declaration_file(&self, keywords: &KeywordSet) -> Vec<String> {
        let name = &self.config.macro_name;
        let mut lines = self.config.banner.clone();
        lines.push(String::new());
        lines.push(format!("#ifndef {name}"));
        lines.push(format!("#define {name}(kw, ...)"));
        lines.push(format!("#endif\t// ifndef {name}"));
        lines.push(String::new());
        lines.extend(self.render_declarations(keywords.iter()));
        lines.push(String::new());
        lines.push(format!("#undef {name}"));
        lines
    }

    /// Banner, warning, and one `case` block per first character.
    pub fn render_matcher(&self, trie: &Trie) -> Vec<String> {
        let mut lines = self.config.banner.clone();
        lines.push(String::new());
        lines.extend(GENERATED_WARNING.iter().map(|&s| s.to_owned()));

        for (c, child) in trie.root().children() {
            log::trace!(
                "case {:?}: {} nodes, {} keywords",
                c,
                child.node_count(),
                child.keyword_count()
            );
            lines.push(format!("case '{c}':"));
            lines.push(format!("\t{}", self.config.advance));

            let ctx = Context::top(c);
            lines.extend(self.render_internal(child, ctx.clone()));
            if child.is_terminal() {
                self.push_assignment(&mut lines, "", &ctx.prefix, child.has_children());
            }

            lines.push("\tbreak;".to_owned());
            lines.push(String::new());
        }
        lines
    }

    /// Renders the conditions for every child of `node`.
    ///
    /// A child opens its own block when it is terminal or branches; otherwise
    /// its single continuation is chained onto the same condition.
    fn render_internal(&self, node: &TrieNode, ctx: Context) -> Vec<String> {
        let tab = "\t".repeat(ctx.depth);
        let new_chain = node.child_count() != 1 || node.is_terminal() || ctx.force_new_chain;
        let mut lines = Vec::new();

        for (i, (c, child)) in node.children().enumerate() {
            let new_scope = child.child_count() != 1 || child.is_terminal();
            let close = if new_scope { ")" } else { "" };

            if new_chain {
                let els = if i != 0 { "else " } else { "" };
                lines.push(format!(
                    "{tab}{els}if ({} == '{c}'{close}",
                    self.config.peek_char
                ));
            } else {
                lines.push(format!(
                    "{tab}\t&& {} == '{c}'{close}",
                    self.config.peek_next_char
                ));
            }

            if new_scope {
                lines.push(format!("{tab}{{"));
                lines.push(format!("{tab}\t{}", self.config.advance));
            }

            let depth = if new_scope { ctx.depth + 1 } else { ctx.depth };
            let child_ctx = ctx.descend(c, depth);
            lines.extend(self.render_internal(child, child_ctx.clone()));

            if child.is_terminal() {
                self.push_assignment(&mut lines, &tab, &child_ctx.prefix, child.has_children());
            }

            if new_scope {
                lines.push(format!("{tab}}}"));
            }
        }
        lines
    }

    /// Pushes the token assignment for `keyword`, wrapped in an `else` block
    /// when longer keywords were tested just before it.
    fn push_assignment(&self, lines: &mut Vec<String>, tab: &str, keyword: &str, guarded: bool) {
        let assignment = format!(
            "{} = {}{};",
            self.config.token_target, self.config.token_prefix, keyword
        );
        if guarded {
            lines.push(format!("{tab}\telse"));
            lines.push(format!("{tab}\t{{"));
            lines.push(format!("{tab}\t\t{assignment}"));
            lines.push(format!("{tab}\t}}"));
        } else {
            lines.push(format!("{tab}\t{assignment}"));
        }
    }
}

/// Writes `lines` to `out`, one per line.
pub fn write_lines<W, S>(out: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
