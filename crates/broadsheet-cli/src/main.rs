use anyhow::{Context, Result, bail};
use broadsheet_config::Config;
use broadsheet_engine::{EditorSession, Marker, io, render_document_html};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

mod viewer;

const USAGE: &str = "\
Usage:
  {program} render <article.toml>
  {program} format <article.toml> <paragraph> <start> <end> <marker>
  {program} active <article.toml> <paragraph> <start> <end>
  {program} view [article.toml]

Markers: bold, italic, blockquote, bullet, ordered
Offsets count UTF-16 code units";

/// Logging defaults to warnings so stdout stays clean; `RUST_LOG` overrides.
fn log_env(filter_var: &str) -> env_logger::Env<'_> {
    env_logger::Env::default().filter_or(filter_var, "warn")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(log_env(env_logger::DEFAULT_FILTER_ENV)).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("broadsheet");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };

    let command = args.get(1).map(String::as_str);
    let rest = args.get(2..).unwrap_or_default();

    let result = match command {
        Some("render") => render(config.as_ref(), rest),
        Some("format") => format(config.as_ref(), rest),
        Some("active") => active(config.as_ref(), rest),
        Some("view") => view(config.as_ref(), rest),
        _ => {
            eprintln!("{}", USAGE.replace("{program}", program));
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
    Ok(())
}

fn render(config: Option<&Config>, args: &[String]) -> Result<()> {
    let path = article_path(config, args.first())?;
    let doc = io::read_article(&path)?;
    print!("{}", render_document_html(&doc));
    Ok(())
}

fn format(config: Option<&Config>, args: &[String]) -> Result<()> {
    let [article, paragraph, start, end, marker] = args else {
        bail!("format expects <article.toml> <paragraph> <start> <end> <marker>");
    };
    let path = article_path(config, Some(article))?;
    let (paragraph, start, end) = parse_selection(paragraph, start, end)?;
    let marker: Marker = marker.parse()?;

    let mut session = EditorSession::new(io::read_article(&path)?);
    session.select(paragraph, start, end)?;
    let edit = session.apply_format(paragraph, marker)?;

    if edit.applied {
        io::write_article(&path, session.document())?;
        log::info!("{marker} applied to paragraph {paragraph} of {}", path.display());
        println!("applied {}..{}", edit.range.start, edit.range.end);
    } else {
        println!("unchanged {}..{}", edit.range.start, edit.range.end);
    }
    Ok(())
}

fn active(config: Option<&Config>, args: &[String]) -> Result<()> {
    let [article, paragraph, start, end] = args else {
        bail!("active expects <article.toml> <paragraph> <start> <end>");
    };
    let path = article_path(config, Some(article))?;
    let (paragraph, start, end) = parse_selection(paragraph, start, end)?;

    let mut session = EditorSession::new(io::read_article(&path)?);
    session.select(paragraph, start, end)?;
    let names: Vec<&str> = session
        .active_formats(paragraph)
        .iter()
        .map(Marker::name)
        .collect();
    println!("{}", names.join(" "));
    Ok(())
}

fn view(config: Option<&Config>, args: &[String]) -> Result<()> {
    let path = article_path(config, args.first())?;
    let doc = io::read_article(&path)?;
    viewer::run(path, doc)
}

/// Resolves the article argument, falling back to the configured default.
fn article_path(config: Option<&Config>, arg: Option<&String>) -> Result<PathBuf> {
    match (arg, config) {
        (Some(arg), Some(config)) => Ok(config.resolve_article(Path::new(arg))),
        (Some(arg), None) => Ok(PathBuf::from(arg)),
        (None, Some(Config {
            default_article: Some(default),
            ..
        })) => Ok(default.clone()),
        (None, _) => bail!(
            "No article given and no default_article in {}",
            Config::config_path().display()
        ),
    }
}

fn parse_selection(paragraph: &str, start: &str, end: &str) -> Result<(usize, usize, usize)> {
    let paragraph = paragraph
        .parse()
        .with_context(|| format!("invalid paragraph index '{paragraph}'"))?;
    let start = start
        .parse()
        .with_context(|| format!("invalid selection start '{start}'"))?;
    let end = end
        .parse()
        .with_context(|| format!("invalid selection end '{end}'"))?;
    Ok((paragraph, start, end))
}
