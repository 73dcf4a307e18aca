use clap::Parser;
use crossterm::style::Stylize;
use mikmaw_core::core::types::Table;
use mikmaw_core::{Conjugation, ConjugatorEngine, ConjugatorError, EngineConfig, Orthography};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_VERB: &str = "teluisit";
const DEFAULT_TEXT: &str = "put*p";

#[derive(Parser, Debug)]
#[command(name = "conjugator", about = "Mi'kmaw verb paradigms and spelling conversion")]
struct Args {
    /// Engine configuration file (JSON)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Interface language of table titles and pronouns
    #[arg(long, short = 'l')]
    language: Option<String>,

    /// Spelling of the input
    #[arg(long, short = 'o')]
    orthography: Option<Orthography>,

    /// Convert this text and exit
    #[arg(long)]
    convert: Option<String>,

    /// Conjugate this verb and exit
    verb: Option<String>,
}

struct Session {
    language: String,
    orthography: Orthography,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> mikmaw_core::Result<()> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(orthography) = args.orthography {
        config.orthography = orthography;
    }

    let engine = ConjugatorEngine::from_config(&config)?;
    let mut session = Session {
        language: config.language.clone(),
        orthography: config.orthography,
    };

    if let Some(text) = args.convert {
        print_conversion(&engine, &text, session.orthography)?;
        return Ok(());
    }
    if let Some(verb) = args.verb {
        return print_conjugation(&engine, &verb, &session);
    }

    repl(&engine, &mut session)
}

fn repl(engine: &ConjugatorEngine, session: &mut Session) -> mikmaw_core::Result<()> {
    print_banner(session);

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        let outcome = match cmd {
            "exit" => break,
            "" => print_conjugation(engine, DEFAULT_VERB, session),
            ":convert" => print_conversion(engine, DEFAULT_TEXT, session.orthography),
            s if s.starts_with(":convert ") => {
                print_conversion(engine, s[":convert ".len()..].trim(), session.orthography)
            }
            s if s.starts_with(":lang ") => {
                let language = s[":lang ".len()..].trim();
                engine.locale(language).map(|locale| {
                    session.language = locale.language.clone();
                    println!("Language: {}", session.language);
                })
            }
            s if s.starts_with(":ortho ") => {
                s[":ortho ".len()..].trim().parse::<Orthography>().map(|orthography| {
                    session.orthography = orthography;
                    println!("Orthography: {}", session.orthography);
                })
            }
            s if s.starts_with(':') => {
                print_help();
                Ok(())
            }
            verb => print_conjugation(engine, verb, session),
        };

        if let Err(e) = outcome {
            error!(error = %e, "request failed");
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
        }
    }
    Ok(())
}

fn print_banner(session: &Session) {
    println!("{}", "Mi'kmaw Verb Conjugator".bold());
    println!("---------------------------------------------------------------");
    println!("Language: {}   Orthography: {}", session.language, session.orthography);
    print_help();
}

fn print_help() {
    println!("Type a verb and press [Enter] to conjugate it ([Enter] alone: '{}').", DEFAULT_VERB);
    println!("':convert <text>' converts spelling, ':lang <tag>' and ':ortho <name>' switch settings.");
    println!("'exit' to quit.");
}

fn print_conjugation(engine: &ConjugatorEngine, verb: &str, session: &Session) -> mikmaw_core::Result<()> {
    match engine.conjugate(verb, session.orthography, &session.language) {
        Ok(conjugation) => {
            print_paradigm(&conjugation);
            Ok(())
        }
        Err(ConjugatorError::Unrecognized(_)) => {
            let locale = engine.locale(&session.language)?;
            println!("{}", locale.verb_unrecognized.as_str().yellow());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_paradigm(conjugation: &Conjugation) {
    println!(
        "\n{} {} ({})",
        "Conjugation".bold(),
        conjugation.label.as_str().cyan().bold(),
        conjugation.model
    );
    if let Some(note) = &conjugation.disclaimer {
        println!("{}", note.as_str().italic());
    }
    for table in &conjugation.tables {
        print_table(table);
    }
}

fn print_table(table: &Table) {
    println!("\n{}", table.title.as_str().green().bold());
    if table.rows.iter().all(|row| row.iter().skip(1).all(String::is_empty)) {
        println!("  -");
        return;
    }

    let columns = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in &table.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        println!("  {}", line.join("  ").trim_end());
    }
}

fn print_conversion(engine: &ConjugatorEngine, text: &str, source: Orthography) -> mikmaw_core::Result<()> {
    let out = engine.convert(text, source)?;
    println!("\n{} ({})", text.bold(), out.source);
    for target in Orthography::ALL {
        println!("  {:<14} {}", target.tag(), out.forms.get(target));
    }
    if let Some(position) = out.unterminated_escape {
        println!(
            "{}",
            format!("Escape opened at character {} is never closed; the rest was copied as is.", position)
                .yellow()
        );
    }
    if out.pacifique_disclaimer || out.rand_disclaimer {
        println!(
            "{}",
            "Conversions out of historical spellings are approximate.".italic()
        );
    }
    Ok(())
}
