//! Keyword matcher generator.
//!
//! `ppkw-gen` turns a list of preprocessor keywords into two pieces of C-like
//! source text for a hand-written lexer:
//!  * a declaration list, one `PPKEYWORD (name, c0, c1, ...)` line per keyword;
//!  * the body of the lexer's `switch`, matching every keyword character by
//!    character with nested conditionals derived from a prefix tree.
//!
//! ```rust
//! use ppkw_gen::{Emitter, KeywordSet, Trie};
//!
//! let keywords = KeywordSet::new(["if", "ifdef", "pragma"]).unwrap();
//! let trie = Trie::from(&keywords);
//! let emitter = Emitter::default();
//!
//! let decls = emitter.render_declarations(keywords.iter());
//! assert_eq!(decls[0], "PPKEYWORD (if, i, f)");
//!
//! let matcher = emitter.render_matcher(&trie);
//! assert!(matcher.iter().any(|l| l == "case 'p':"));
//! ```
//!
//! The [`generate`] function reads a keyword list file and writes both
//! outputs into a directory, which makes it usable from a `build.rs` script.

pub mod emit;
mod error;
mod generate;
pub mod keywords;
pub mod trie;

#[cfg(test)]
mod test_matcher;

pub use emit::{EmitConfig, Emitter, write_lines};
pub use error::KeywordError;
pub use generate::{generate, generate_with, render_all, write_outputs};
pub use keywords::KeywordSet;
pub use trie::{Trie, TrieNode};
