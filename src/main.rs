use std::fs;

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use triuth::{
    catalog::{CATALOG, Identity, find},
    error::Error,
    interpreter::table::{TruthTable, enumerate},
    process,
};

/// triuth prints exhaustive truth tables for process spaces expressions
/// written in prefix notation, e.g. `equiv [= A B robust || - A B`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file with one expression per line. Blank lines
    /// and lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Report whether each expression holds in every row instead of printing
    /// the table.
    #[arg(short, long)]
    check: bool,

    /// Run the built-in catalog: every entry, or only the one named.
    #[arg(long, value_name = "NAME")]
    catalog: Option<Option<String>>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to tabulate, or a file path with `--file`. May start
    /// with `-`, e.g. `"- A"`.
    #[arg(required_unless_present = "catalog", allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level,
                                     Config::default(),
                                     TerminalMode::Stderr,
                                     ColorChoice::Auto)
    {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if let Some(name) = &args.catalog {
        let entries = select_catalog(name.as_deref()).unwrap_or_else(|| {
                          eprintln!("Unknown catalog entry '{}'. Run --catalog without a name to \
                                     list them all.",
                                    name.as_deref().unwrap_or_default());
                          std::process::exit(1);
                      });
        for identity in entries {
            info!("catalog entry '{}'", identity.name);
            println!("# {}: {}", identity.name, identity.description);
            report(identity.expression, args.check)?;
        }
        return Ok(());
    }

    let contents = args.contents.as_deref().unwrap_or_default();
    if !args.file {
        return report(contents, args.check);
    }

    let script = fs::read_to_string(contents).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{contents}'. Perhaps this file does \
                                not exist?");
                     std::process::exit(1);
                 });
    for line in script.lines()
                      .map(str::trim)
                      .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        report(line, args.check)?;
    }

    Ok(())
}

/// Returns every catalog entry, or just the named one. `None` if the name is
/// unknown.
fn select_catalog(name: Option<&str>) -> Option<Vec<&'static Identity>> {
    match name {
        Some(name) => find(name).map(|identity| vec![identity]),
        None => Some(CATALOG.iter().collect()),
    }
}

fn report(expression: &str, check: bool) -> Result<(), Error> {
    print!("{}", render(expression, check)?);
    Ok(())
}

/// The text printed for one expression. Always ends with exactly one newline.
fn render(expression: &str, check: bool) -> Result<String, Error> {
    let expression = expression.trim();
    let mut out = if check && !expression.is_empty() {
        verdict(&enumerate(expression)?)
    } else {
        process(expression)?
    };

    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn verdict(table: &TruthTable) -> String {
    if table.is_identity() {
        return format!("{}: holds in all {} rows\n", table.expression(), table.rows().len());
    }

    let mut out = format!("{}: does not hold\n", table.expression());
    for row in table.counterexamples() {
        out.push_str(&format!("  {row}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_may_start_with_negation() {
        let args = Args::try_parse_from(["triuth", "- A"]).unwrap();
        assert_eq!(args.contents.as_deref(), Some("- A"));

        let args = Args::try_parse_from(["triuth", "-c", "- - A A"]).unwrap();
        assert!(args.check);
        assert_eq!(args.contents.as_deref(), Some("- - A A"));
    }

    #[test]
    fn catalog_takes_an_optional_name() {
        let args = Args::try_parse_from(["triuth", "--catalog"]).unwrap();
        assert_eq!(args.catalog, Some(None));
        assert!(args.contents.is_none());

        let args = Args::try_parse_from(["triuth", "--catalog", "mix"]).unwrap();
        assert_eq!(args.catalog, Some(Some("mix".to_string())));
    }

    #[test]
    fn contents_required_without_catalog() {
        assert!(Args::try_parse_from(["triuth", "-c"]).is_err());
    }

    #[test]
    fn catalog_selection() {
        assert_eq!(select_catalog(None).as_ref().map(Vec::len), Some(CATALOG.len()));

        let entries = select_catalog(Some("lollipop")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].expression, "== lpop A B || - A B");

        assert!(select_catalog(Some("nonexistent")).is_none());
    }

    #[test]
    fn output_ends_with_a_single_newline() {
        let table = render("robust A", false).unwrap();
        assert!(table.ends_with("{A: E} true\n"));
        assert!(!table.ends_with("\n\n"));

        assert_eq!(render("  ", false).unwrap(), format!("{}\n", triuth::INSTRUCTIONS));
        assert_eq!(render("  ", true).unwrap(), format!("{}\n", triuth::INSTRUCTIONS));
    }

    #[test]
    fn check_lists_counterexamples() {
        assert_eq!(render("[= phi || A - A", true).unwrap(),
                   "[= phi || A - A: holds in all 3 rows\n");
        assert_eq!(render("robust A", true).unwrap(),
                   "robust A: does not hold\n  {A: R} false\n");
    }
}
