use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use markdown_folio_config::Config;
use markdown_folio_engine::{
    DocumentSet, LanguageTable, Page, Resolver, TranslationSet, minify_css, render_document_set,
};
use std::{
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
};

/// Compile a folder of markdown into a single HTML document.
#[derive(Debug, Parser)]
#[command(name = "markdown-folio", version, arg_required_else_help = true)]
struct Cli {
    /// The input directory or markdown file to compile
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the HTML document (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The CSS file to inline, if any
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Translation table (.csv) with a `key` column and one column per language
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Language column of the translation table to use (default: the first)
    #[arg(short, long)]
    language: Option<String>,

    /// File-name pattern used when the input is a directory
    #[arg(short, long)]
    pattern: Option<String>,

    /// Document title (default: the input's name)
    #[arg(long)]
    title: Option<String>,

    /// Config file to use instead of ~/.config/markdown-folio/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Command-line flags merged over the config file.
#[derive(Debug, PartialEq)]
struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    style: Option<PathBuf>,
    translations: Option<PathBuf>,
    language: Option<String>,
    pattern: String,
    title: Option<String>,
}

impl Options {
    fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            style: cli.style.or(config.style),
            translations: cli.translations.or(config.translations),
            language: cli.language.or(config.language),
            pattern: cli
                .pattern
                .or(config.pattern)
                .unwrap_or_else(|| DocumentSet::DEFAULT_PATTERN.to_string()),
            title: cli.title.or(config.title),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?.unwrap_or_default();
    let options = Options::resolve(cli, config);

    run(&options)
}

fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("Config file not found: {}", path.display());
            }
            info!("Using config file {}", path.display());
            Ok(config)
        }
        None => Ok(Config::load()?),
    }
}

fn run(options: &Options) -> Result<()> {
    let style = options.style.as_deref().map(load_style).transpose()?;

    let translations = options
        .translations
        .as_deref()
        .map(TranslationSet::load)
        .transpose()?;
    let table = select_language(translations.as_ref(), options.language.as_deref())?;
    let resolver = table.map(Resolver::new).unwrap_or_default();

    let set = DocumentSet::discover(&options.input, &options.pattern)
        .with_context(|| format!("Invalid input {}", options.input.display()))?;
    if set.is_empty() {
        warn!(
            "No files matching '{}' in {}",
            options.pattern,
            set.root().display()
        );
    }
    info!(
        "Compiling {} file(s) from {}",
        set.len(),
        set.root().display()
    );

    let body = render_document_set(&set, resolver)?;
    let title = options.title.as_deref().unwrap_or(set.name());
    let page = Page {
        title,
        language: resolver.table().map(LanguageTable::code),
        style: style.as_deref(),
        body: &body,
    };

    write_output(options.output.as_deref(), &page.render())
}

fn load_style(path: &Path) -> Result<String> {
    if !path.is_file() {
        bail!("Invalid style, path not found: {}", path.display());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read style {}", path.display()))?;
    Ok(minify_css(&raw))
}

fn select_language<'t>(
    translations: Option<&'t TranslationSet>,
    language: Option<&str>,
) -> Result<Option<&'t LanguageTable>> {
    let table = match (translations, language) {
        (Some(set), Some(code)) => Some(set.language(code)?),
        (Some(set), None) => set.default_language(),
        (None, Some(code)) => {
            warn!("Language {code} requested without a translation file, ignoring");
            None
        }
        (None, None) => None,
    };
    if let Some(table) = table {
        if table.is_empty() {
            warn!("Language {} has no translations", table.code());
        } else {
            info!(
                "Translating to {} ({} keys)",
                table.code(),
                table.len()
            );
        }
    }
    Ok(table)
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write output {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(html.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("markdown-folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            pattern: Some("*.txt".to_string()),
            language: Some("en".to_string()),
            title: Some("From config".to_string()),
            ..Config::default()
        };

        let options = Options::resolve(cli(&["-i", "book", "-l", "de"]), config);

        assert_eq!(options.language.as_deref(), Some("de"));
        assert_eq!(options.pattern, "*.txt");
        assert_eq!(options.title.as_deref(), Some("From config"));
    }

    #[test]
    fn test_defaults_without_config() {
        let options = Options::resolve(cli(&["--input", "book"]), Config::default());

        assert_eq!(
            options,
            Options {
                input: PathBuf::from("book"),
                output: None,
                style: None,
                translations: None,
                language: None,
                pattern: DocumentSet::DEFAULT_PATTERN.to_string(),
                title: None,
            }
        );
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["markdown-folio", "-o", "out.html"]).is_err());
    }

    #[test]
    fn test_select_default_language() {
        let set = TranslationSet::from_csv("key,EN,DE\nA,a,b").unwrap();
        let table = select_language(Some(&set), None).unwrap().unwrap();
        assert_eq!(table.code(), "EN");
    }

    #[test]
    fn test_select_unknown_language_fails() {
        let set = TranslationSet::from_csv("key,EN\nA,a").unwrap();
        let err = select_language(Some(&set), Some("fr")).unwrap_err();
        assert_eq!(err.to_string(), "Could not find a language called fr");
    }

    #[test]
    fn test_language_without_translations_is_ignored() {
        assert!(select_language(None, Some("de")).unwrap().is_none());
    }
}
