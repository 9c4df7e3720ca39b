//! Hercules Lisp CLI
//!
//! Interactive line loop by default; evaluates a file line by line when one
//! is given.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use hisp::{render, Session, BANNER_HINT, BANNER_TITLE, PROMPT};

/// Settings collected from the command line.
#[derive(Default)]
struct Options {
    file: Option<String>,
    quiet: bool,
    ast: bool,
}

fn main() -> ExitCode {
    hisp::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut options = Options::default();
    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "--quiet" | "-q" => options.quiet = true,
            "--ast" => options.ast = true,
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                print_usage();
                return ExitCode::FAILURE;
            }
            path if options.file.is_none() => options.file = Some(path.to_string()),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let result = match options.file.as_deref() {
        Some(path) => run_file(path, &options),
        None => run_interactive(&options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Hercules Lisp");
    println!();
    println!("Usage: hisp [FILE] [options]");
    println!();
    println!("Without FILE, starts an interactive session.");
    println!();
    println!("Options:");
    println!("  -q, --quiet   Do not print the banner or prompt");
    println!("      --ast     Print the syntax tree of each line instead of evaluating it");
    println!("  -h, --help    Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=hisp_eval=debug) to trace evaluation.");
}

/// Evaluate every non-blank line of `path`, printing each result.
fn run_file(path: &str, options: &Options) -> io::Result<()> {
    let source = std::fs::read_to_string(path)
        .map_err(|err| io::Error::new(err.kind(), format!("cannot read '{path}': {err}")))?;

    let mut session = Session::new();
    let mut out = io::stdout().lock();
    for line in source.lines() {
        process_line(&mut session, line, options, &mut out)?;
    }
    Ok(())
}

/// Prompt, read, evaluate, and print until end of input.
fn run_interactive(options: &Options) -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    if !options.quiet {
        writeln!(out, "{BANNER_TITLE}")?;
        writeln!(out, "{BANNER_HINT}")?;
        writeln!(out)?;
    }

    let mut line = String::new();
    loop {
        if !options.quiet {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF: finish the prompt line
            if !options.quiet {
                writeln!(out)?;
            }
            return Ok(());
        }

        process_line(&mut session, &line, options, &mut out)?;
    }
}

/// Handle one input line; blank lines produce no output.
fn process_line(
    session: &mut Session,
    line: &str,
    options: &Options,
    out: &mut impl Write,
) -> io::Result<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    if options.ast {
        match Session::dump_ast(line) {
            Ok(tree) => write!(out, "{tree}")?,
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        return Ok(());
    }

    let value = session.run_line(line);
    writeln!(out, "{}", render(&value))
}
