use crate::emit::{EmitConfig, Emitter, write_lines};
use crate::{KeywordSet, Trie};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Generate the declaration file and the matcher from a keyword list file.
///
/// Writes `<name>.hxx` (the `PPKEYWORD (...)` list) and `<name>.inl` (the
/// `case` blocks) into `out_dir`. With `debug` set the keyword trie is dumped
/// to the log.
pub fn generate<P: AsRef<Path>>(
    keywords_path: P,
    out_dir: P,
    name: impl AsRef<str>,
    debug: bool,
) -> Result<()> {
    generate_with(keywords_path, out_dir, name, debug, EmitConfig::default())
}

/// Same as [`generate`] with a custom [`EmitConfig`].
pub fn generate_with<P: AsRef<Path>>(
    keywords_path: P,
    out_dir: P,
    name: impl AsRef<str>,
    debug: bool,
    config: EmitConfig,
) -> Result<()> {
    let keywords_path = keywords_path.as_ref();
    let text = std::fs::read_to_string(keywords_path)
        .with_context(|| format!("can't read keyword list {}", keywords_path.display()))?;
    let keywords = KeywordSet::parse(&text)
        .with_context(|| format!("invalid keyword list {}", keywords_path.display()))?;
    write_outputs(&keywords, out_dir.as_ref(), name.as_ref(), debug, config)
}

/// Writes `<name>.hxx` and `<name>.inl` for `keywords` into `out_dir`.
pub fn write_outputs(
    keywords: &KeywordSet,
    out_dir: &Path,
    name: &str,
    debug: bool,
    config: EmitConfig,
) -> Result<()> {
    let trie = Trie::from(keywords);
    log::debug!(
        "{} keywords, {} trie nodes, {} first characters",
        keywords.len(),
        trie.node_count(),
        trie.root().child_count()
    );
    if debug {
        log::debug!("keyword trie:\n{}", trie);
    }

    let emitter = Emitter::new(config);

    let decl_path = out_dir.join(format!("{name}.hxx"));
    let mut out = std::fs::File::create(&decl_path)
        .with_context(|| format!("can't create {}", decl_path.display()))?;
    write_lines(&mut out, &emitter.render_declaration_file(keywords))?;
    log::debug!("wrote {}", decl_path.display());

    let matcher_path = out_dir.join(format!("{name}.inl"));
    let mut out = std::fs::File::create(&matcher_path)
        .with_context(|| format!("can't create {}", matcher_path.display()))?;
    write_lines(&mut out, &emitter.render_matcher(&trie))?;
    log::debug!("wrote {}", matcher_path.display());

    Ok(())
}

/// Writes the declaration lines followed by the matcher to a single sink.
pub fn render_all<W: Write>(keywords: &KeywordSet, config: EmitConfig, out: &mut W) -> Result<()> {
    let emitter = Emitter::new(config);
    write_lines(out, &emitter.render_declarations(keywords.iter()))?;
    write_lines(out, &emitter.render_matcher(&Trie::from(keywords)))?;
    Ok(())
}
