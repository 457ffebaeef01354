use serde::Serialize;
use trailmap::schema::{RoadmapDoc, SchemaError, validate};
use trailmap::{Direction, LayoutedGraph, StepData, layout_roadmap};

use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Schema(SchemaError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Schema(err) => write!(f, "Invalid roadmap document: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<SchemaError> for CliError {
    fn from(value: SchemaError) -> Self {
        Self::Schema(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Validate,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    direction: Direction,
    pretty: bool,
    input: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "trailmap-cli\n\
\n\
USAGE:\n\
  trailmap-cli [layout] [--direction tb|lr] [--pretty] [-o|--output <path>] [<path>|-]\n\
  trailmap-cli validate [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout prints the positioned graph JSON to stdout; use -o/--output to write a file.\n\
  - validate prints nothing and exits 0 when the document is well formed.\n\
"
}

fn parse_direction(s: &str) -> Result<Direction, ()> {
    match s.trim().to_ascii_lowercase().as_str() {
        "tb" | "top-to-bottom" => Ok(Direction::TopToBottom),
        "lr" | "left-to-right" => Ok(Direction::LeftToRight),
        _ => Err(()),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "validate" => args.command = Command::Validate,
            "--pretty" => args.pretty = true,
            "--direction" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.direction = parse_direction(dir).map_err(|_| CliError::Usage(usage()))?;
            }
            "-o" | "--out" | "--output" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other => {
                if other.starts_with('-') && other != "-" {
                    return Err(CliError::Usage(usage()));
                }
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(other.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    title: &'a str,
    #[serde(flatten)]
    graph: LayoutedGraph<StepData>,
}

fn write_json<T: Serialize>(value: &T, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match out {
        Some(path) => std::fs::write(path, text + "\n")?,
        None => println!("{text}"),
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc: RoadmapDoc = serde_json::from_str(&text)?;
    validate(&doc)?;

    match args.command {
        Command::Validate => Ok(()),
        Command::Layout => {
            let graph = layout_roadmap(&doc.nodes, &doc.edges, args.direction);
            let out = LayoutOut {
                title: &doc.title,
                graph,
            };
            write_json(&out, args.pretty, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Schema(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
