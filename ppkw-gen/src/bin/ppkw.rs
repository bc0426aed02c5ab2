//! Command-line interface for the keyword matcher generator.
//!
//! Without `--output-dir` the declaration list and the matcher are printed to
//! standard output one after the other.

#[cfg(feature = "cli")]
mod real {
    use anyhow::Context;
    use clap::Parser;
    use ppkw_gen::{EmitConfig, KeywordSet, Trie};
    use std::path::PathBuf;

    #[derive(Parser)]
    #[command(about = "Generate a trie-based keyword matcher")]
    struct Args {
        /// Keyword list file (defaults to the built-in preprocessor keywords).
        #[arg(short = 'k', long)]
        keywords: Option<PathBuf>,

        /// Write `<name>.hxx` and `<name>.inl` into this directory instead of stdout.
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        /// Prefix used to construct output file names.
        #[arg(short = 'n', long, default_value = "keywords")]
        name: String,

        /// Macro invoked by each declaration line.
        #[arg(short = 'm', long)]
        macro_name: Option<String>,

        /// Prefix of the assigned token type, e.g. `SyntaxKind::KwPp_`.
        #[arg(short = 't', long)]
        token_prefix: Option<String>,

        /// Enable debug logging and dump the keyword trie.
        #[arg(short = 'd', long)]
        debug: bool,
    }

    pub fn main() -> anyhow::Result<()> {
        let args = Args::parse();
        let level = if args.debug { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

        let keywords = match &args.keywords {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("can't read keyword list {}", path.display()))?;
                KeywordSet::parse(&text)?
            }
            None => KeywordSet::preprocessor(),
        };

        let mut config = EmitConfig::default();
        if let Some(macro_name) = args.macro_name {
            config.macro_name = macro_name;
        }
        if let Some(token_prefix) = args.token_prefix {
            config.token_prefix = token_prefix;
        }

        match args.output_dir {
            Some(dir) => ppkw_gen::write_outputs(&keywords, &dir, &args.name, args.debug, config),
            None => {
                if args.debug {
                    log::debug!("keyword trie:\n{}", Trie::from(&keywords));
                }
                let stdout = std::io::stdout();
                ppkw_gen::render_all(&keywords, config, &mut stdout.lock())
            }
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    real::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("ppkw disabled (compiled without `cli` feature)");
}
