//! `rdf-profile`: resolves short names against a profile and builds N-Triples.
//!
//! The effective profile is the built-in `rdf`/`rdfs`/`xsd`/`owl` prefixes,
//! then the `--profile` document, then `--prefix`/`--term`/`--default-prefix`/
//! `--vocab` flags, each layer replacing the one before on conflicts.
//!
//! **Usage:**
//! ```
//! rdf-profile [--profile <file>] [--prefix ex=http://example.com/] resolve ex:a rdf:type
//! rdf-profile shrink http://www.w3.org/1999/02/22-rdf-syntax-ns#type
//! rdf-profile triple _:b0 rdf:type '"hello"@en'
//! rdf-profile dump
//! ```
//!
//! Exits non-zero if any name cannot be resolved.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use rdf_profile::{Environment, ImportMode, Profile, Term};
use tracing_subscriber::EnvFilter;

/// Resolve and compact RDF names, and build N-Triples statements.
#[derive(Parser)]
#[command(name = "rdf-profile", about = "Resolve CURIEs and terms against an RDF profile")]
struct Args {
    /// JSON profile document to load.
    #[arg(long, env = "RDF_PROFILE", global = true)]
    profile: Option<PathBuf>,

    /// Prefix mapping, as `label=stem`. Repeatable.
    #[arg(long = "prefix", value_name = "LABEL=STEM", value_parser = parse_pair, global = true)]
    prefixes: Vec<(String, String)>,

    /// Term mapping, as `term=iri`. Repeatable.
    #[arg(long = "term", value_name = "TERM=IRI", value_parser = parse_pair, global = true)]
    terms: Vec<(String, String)>,

    /// Stem for `:local` names.
    #[arg(long, value_name = "STEM", global = true)]
    default_prefix: Option<String>,

    /// Stem for bare terms without a mapping.
    #[arg(long = "vocab", value_name = "STEM", global = true)]
    default_vocabulary: Option<String>,

    /// Start from an empty profile instead of the built-in prefixes.
    #[arg(long, global = true)]
    no_builtins: bool,

    /// Log resolution steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the IRI for each name.
    Resolve {
        /// CURIEs (`ex:a`, `:a`) or bare terms.
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the shortest name for each IRI.
    Shrink {
        /// Full IRIs.
        #[arg(required = true)]
        iris: Vec<String>,
    },
    /// Print one N-Triples statement.
    Triple {
        /// Subject: a name, `<iri>` or `_:label`.
        subject: String,
        /// Predicate: a name or `<iri>`.
        predicate: String,
        /// Object: a name, `<iri>`, `_:label`, `"text"`, `"text"@lang` or `"text"^^name`.
        object: String,
    },
    /// Print the effective profile as JSON.
    Dump,
}

/// Lines a subcommand produced, plus the names it could not resolve.
#[derive(Debug, Default, PartialEq, Eq)]
struct Output {
    lines: Vec<String>,
    unresolved: Vec<String>,
}

impl Output {
    fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            unresolved: Vec::new(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let env = build_environment(&args)?;
    let output = run(&env, &args.command)?;

    for line in &output.lines {
        println!("{line}");
    }
    for name in &output.unresolved {
        eprintln!("unresolved: {name}");
    }
    if !output.unresolved.is_empty() {
        process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_environment(args: &Args) -> Result<Environment> {
    let mut env = if args.no_builtins {
        Environment::with_profile(Profile::new())
    } else {
        Environment::new()
    };

    if let Some(path) = &args.profile {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let loaded = Profile::from_json_str(&json)
            .with_context(|| format!("Failed to parse profile {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded profile document");
        env.import_profile(&loaded, ImportMode::Replace);
    }

    for (label, stem) in &args.prefixes {
        env.set_prefix(label.as_str(), stem.as_str());
    }
    for (term, iri) in &args.terms {
        env.set_term(term.as_str(), iri.as_str());
    }
    if let Some(stem) = &args.default_prefix {
        env.set_default_prefix(stem.as_str());
    }
    if let Some(stem) = &args.default_vocabulary {
        env.set_default_vocabulary(stem.as_str());
    }
    Ok(env)
}

fn run(env: &Environment, command: &Command) -> Result<Output> {
    match command {
        Command::Resolve { names } => Ok(resolve_names(env, names)),
        Command::Shrink { iris } => Ok(Output::from_lines(shrink_iris(env, iris))),
        Command::Triple {
            subject,
            predicate,
            object,
        } => Ok(Output::from_lines(vec![build_triple(env, subject, predicate, object)?])),
        Command::Dump => Ok(Output::from_lines(vec![env.profile().to_json_string()?])),
    }
}

/// Resolves every name, collecting the ones with no mapping.
fn resolve_names(env: &Environment, names: &[String]) -> Output {
    let mut output = Output::default();
    for name in names {
        match env.resolve(name) {
            Some(iri) => output.lines.push(iri),
            None => output.unresolved.push(name.clone()),
        }
    }
    output
}

/// Compacts every IRI, falling back to `<iri>`.
fn shrink_iris(env: &Environment, iris: &[String]) -> Vec<String> {
    iris.iter()
        .map(|iri| env.shrink(iri).unwrap_or_else(|| format!("<{iri}>")))
        .collect()
}

fn build_triple(env: &Environment, subject: &str, predicate: &str, object: &str) -> Result<String> {
    let triple = env.create_triple(
        parse_term(env, subject)?,
        parse_term(env, predicate)?,
        parse_term(env, object)?,
    )?;
    Ok(triple.to_string())
}

fn parse_pair(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

/// Reads one command-line term.
fn parse_term(env: &Environment, arg: &str) -> Result<Term> {
    if let Some(label) = arg.strip_prefix("_:") {
        return Ok(env.create_blank_node_with_label(label).into());
    }
    if let Some(iri) = arg.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        return Ok(env.create_named_node(iri).into());
    }
    if let Some(rest) = arg.strip_prefix('"') {
        let (value, suffix) = read_literal(rest).with_context(|| format!("bad literal: {arg}"))?;
        if suffix.is_empty() {
            return Ok(env.create_literal(value).into());
        }
        if let Some(lang) = suffix.strip_prefix('@') {
            return Ok(env.create_lang_literal(value, lang).into());
        }
        if let Some(datatype) = suffix.strip_prefix("^^") {
            let Term::NamedNode(dt) = parse_term(env, datatype)? else {
                bail!("datatype must be a name or IRI: {datatype}");
            };
            return Ok(env.create_typed_literal(value, dt).into());
        }
        bail!("unexpected text after literal: {suffix}");
    }
    let iri = env
        .resolve(arg)
        .ok_or_else(|| anyhow!("unresolved: {arg}"))?;
    Ok(env.create_named_node(iri).into())
}

/// Reads quoted text up to its closing `"`, undoing N-Triples escapes.
///
/// `rest` follows the opening quote. Returns the text and whatever follows the
/// closing quote.
fn read_literal(rest: &str) -> Result<(String, &str)> {
    let mut value = String::with_capacity(rest.len());
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &rest[i + 1..])),
            '\\' => {
                let unescaped = match chars.next() {
                    Some((_, '"')) => '"',
                    Some((_, '\\')) => '\\',
                    Some((_, 'n')) => '\n',
                    Some((_, 'r')) => '\r',
                    Some((_, 't')) => '\t',
                    Some((_, other)) => bail!("unknown escape \\{other}"),
                    None => break,
                };
                value.push(unescaped);
            }
            c => value.push(c),
        }
    }
    bail!("unterminated literal")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn args(argv: &[&str]) -> Result<Args> {
        Ok(Args::try_parse_from(
            std::iter::once("rdf-profile").chain(argv.iter().copied()),
        )?)
    }

    fn run_args(argv: &[&str]) -> Result<Output> {
        let args = args(argv)?;
        let env = build_environment(&args)?;
        run(&env, &args.command)
    }

    #[test]
    fn pairs_split_at_first_equals() {
        assert_eq!(
            parse_pair("ex=http://example.com/?a=b"),
            Ok(("ex".to_owned(), "http://example.com/?a=b".to_owned()))
        );
        assert!(parse_pair("ex").is_err());
    }

    #[test]
    fn term_forms() -> Result<()> {
        let env = Environment::new();
        assert_eq!(parse_term(&env, "_:x")?.to_string(), "_:x");
        assert_eq!(
            parse_term(&env, "<http://example.com/>")?.to_string(),
            "<http://example.com/>"
        );
        assert_eq!(
            parse_term(&env, "rdf:type")?.to_string(),
            "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"
        );
        assert_eq!(parse_term(&env, "\"hi\"@EN")?.to_string(), "\"hi\"@en");
        assert_eq!(
            parse_term(&env, "\"1\"^^xsd:integer")?.to_string(),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        Ok(())
    }

    #[test]
    fn empty_language_tag_gives_plain_literal() -> Result<()> {
        let env = Environment::new();
        assert_eq!(parse_term(&env, "\"x\"@")?.to_string(), "\"x\"");
        Ok(())
    }

    #[test]
    fn literal_escapes_are_read_once() -> Result<()> {
        let env = Environment::new();
        let term = parse_term(&env, r#""a\"b""#)?;
        assert_eq!(term.as_literal().map(|l| l.value()), Some("a\"b"));
        assert_eq!(term.to_string(), r#""a\"b""#);

        let term = parse_term(&env, r#""tab\there\\ \n""#)?;
        assert_eq!(term.as_literal().map(|l| l.value()), Some("tab\there\\ \n"));
        assert_eq!(term.to_string(), r#""tab\there\\ \n""#);
        Ok(())
    }

    #[test]
    fn bad_terms() {
        let env = Environment::new();
        assert!(parse_term(&env, "nope:x").is_err());
        assert!(parse_term(&env, "\"open").is_err());
        assert!(parse_term(&env, "\"x\"^^_:b").is_err());
        assert!(parse_term(&env, "\"x\"junk").is_err());
        assert!(parse_term(&env, r#""a\q""#).is_err());
        assert!(parse_term(&env, r#""a\""#).is_err());
    }

    #[test]
    fn flags_layer_over_builtins() -> Result<()> {
        let args = args(&[
            "--prefix",
            "rdf=http://example.com/rdf/",
            "--vocab",
            "http://schema.org/",
            "resolve",
            "rdf:type",
        ])?;
        let env = build_environment(&args)?;
        assert_eq!(
            env.resolve("rdf:type").as_deref(),
            Some("http://example.com/rdf/type")
        );
        assert_eq!(
            env.resolve("Person").as_deref(),
            Some("http://schema.org/Person")
        );
        Ok(())
    }

    #[test]
    fn no_builtins() -> Result<()> {
        let args = args(&["--no-builtins", "dump"])?;
        let env = build_environment(&args)?;
        assert_eq!(env.resolve("rdf:type"), None);
        Ok(())
    }

    #[test]
    fn resolve_reports_every_unresolved_name() -> Result<()> {
        let output = run_args(&["resolve", "rdf:type", "nope:x", "owl:Class", "Person"])?;
        assert_eq!(
            output.lines,
            vec![
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                "http://www.w3.org/2002/07/owl#Class",
            ]
        );
        assert_eq!(output.unresolved, vec!["nope:x", "Person"]);
        Ok(())
    }

    #[test]
    fn shrink_prefers_terms_then_curies() -> Result<()> {
        let output = run_args(&[
            "--term",
            "label=http://www.w3.org/2000/01/rdf-schema#label",
            "shrink",
            "http://www.w3.org/2000/01/rdf-schema#label",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            "http://other.org/x",
        ])?;
        assert_eq!(output.lines, vec!["label", "rdf:type", "<http://other.org/x>"]);
        assert!(output.unresolved.is_empty());
        Ok(())
    }

    #[test]
    fn triple_prints_one_statement() -> Result<()> {
        let output = run_args(&["triple", "_:s", "rdf:type", "\"a\\\"b\"@EN"])?;
        assert_eq!(
            output.lines,
            vec![r#"_:s <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> "a\"b"@en ."#]
        );
        assert!(run_args(&["triple", "\"lit\"", "rdf:type", "owl:Class"]).is_err());
        Ok(())
    }

    #[test]
    fn dump_parses_back() -> Result<()> {
        let output = run_args(&["--prefix", "ex=http://example.com/", "dump"])?;
        let dumped = Profile::from_json_str(&output.lines.join("\n"))?;
        assert_eq!(
            dumped.resolve("ex:a").as_deref(),
            Some("http://example.com/a")
        );
        assert_eq!(
            dumped.resolve("rdf:type").as_deref(),
            Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
        );
        Ok(())
    }

    #[test]
    fn profile_file_loads_under_flags() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                "defaultVocabulary": "http://schema.org/",
                "prefixes": {{ "ex": "http://example.com/", "rdf": "http://example.com/rdf/" }},
                "terms": {{ "knows": "http://xmlns.com/foaf/0.1/knows" }}
            }}"#
        )?;
        let path = file.path().to_string_lossy().into_owned();

        let output = run_args(&[
            "--profile",
            &path,
            "--prefix",
            "ex=http://example.org/",
            "resolve",
            "ex:a",
            "rdf:type",
            "knows",
            "Person",
            "xsd:string",
        ])?;
        assert_eq!(
            output.lines,
            vec![
                "http://example.org/a",
                "http://example.com/rdf/type",
                "http://xmlns.com/foaf/0.1/knows",
                "http://schema.org/Person",
                "http://www.w3.org/2001/XMLSchema#string",
            ]
        );
        assert!(output.unresolved.is_empty());
        Ok(())
    }

    #[test]
    fn unreadable_profile_file_is_an_error() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "prefix": {{}} }}"#)?;
        let path = file.path().to_string_lossy().into_owned();
        assert!(run_args(&["--profile", &path, "dump"]).is_err());

        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.json");
        let missing = missing.to_string_lossy().into_owned();
        assert!(run_args(&["--profile", &missing, "dump"]).is_err());
        Ok(())
    }
}
