use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use mep::batch::run_batch;
use mep::binding::parse_binding;
use mep::repl::ReplSession;
use mep::{analyze, parse, render, MepError, VarTable};
use mep_lexer::Lexer;

#[derive(Debug, Parser)]
#[command(
    name = "mep",
    version,
    about = "Parse, render and evaluate infix math expressions",
    long_about = "mep parses infix math expressions with numbers, variables, signs,\n\
        single-argument functions and parentheses, then evaluates or re-renders them.\n\n\
        EXAMPLES:\n\
        \n  mep eval '2^2^2'                     Evaluate an expression\n\
        \n  mep eval --var x=2 'sin(x) + 1'      Bind a variable\n\
        \n  mep render '1+2*3'                   Print the fully parenthesised tree\n\
        \n  mep batch cases.txt                  Evaluate one expression per line\n\
        \n  mep repl                             Start interactive REPL"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression
    Eval(EvalArgs),

    /// Print the canonical, fully parenthesised form of an expression
    Render(ExprArg),

    /// List the tokens of an expression
    Tokens(ExprArg),

    /// Print the parsed tree as JSON
    Json(ExprArg),

    /// Evaluate one expression per line of a file
    #[command(long_about = "Evaluate one expression per line of FILE (stdin if omitted).\n\n\
        Blank lines and lines starting with '#' are skipped. Exits with status 1\n\
        if any expression fails.")]
    Batch(BatchArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(long_about = "Start an interactive Read-Eval-Print Loop.\n\n\
        Commands:\n\
        \n  :help   Show available REPL commands\n\
        \n  :quit   Exit the REPL (also :q, :exit)")]
    Repl(VarArgs),

    /// List the functions that can be called by name
    Functions,
}

#[derive(Debug, Args, Clone)]
struct ExprArg {
    /// The expression
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expr: String,
}

#[derive(Debug, Args, Clone, Default)]
struct VarArgs {
    /// Bind a variable, e.g. --var x=2 (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding_arg)]
    vars: Vec<(String, f64)>,

    /// Value of variables without a binding
    #[arg(long = "default", value_name = "VALUE", allow_negative_numbers = true)]
    default_value: Option<f64>,

    /// Reject expressions that use unbound variables
    #[arg(long)]
    strict: bool,
}

impl VarArgs {
    fn table(&self) -> VarTable {
        let mut table = match self.default_value {
            Some(value) => VarTable::with_default(value),
            None => VarTable::new(),
        };
        table.extend(self.vars.iter().cloned());
        table
    }
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// The expression
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expr: String,

    #[command(flatten)]
    vars: VarArgs,

    /// Print a JSON report instead of the bare value
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args, Clone)]
struct BatchArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    vars: VarArgs,
}

fn parse_binding_arg(arg: &str) -> Result<(String, f64), String> {
    parse_binding(arg).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins over -v
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_eval(args: &EvalArgs) -> i32 {
    let report = analyze(&args.expr, &args.vars.table(), args.vars.strict);
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return 2;
            }
        }
        return if report.is_ok() { 0 } else { 1 };
    }

    match (report.value, report.error) {
        (_, Some(error)) => {
            eprintln!("{error}");
            1
        }
        (Some(value), None) => {
            println!("{value}");
            0
        }
        (None, None) => 0,
    }
}

fn run_render(expr: &str) -> i32 {
    match parse(expr) {
        Ok(tree) => {
            println!("{}", render(&tree));
            0
        }
        Err(err) => {
            eprintln!("{}", MepError::from(err).describe(expr));
            1
        }
    }
}

fn run_tokens(expr: &str) -> i32 {
    for token in Lexer::new(expr) {
        match token {
            Ok(token) => println!("{token}"),
            Err(err) => {
                eprintln!("error: {err}");
                return 1;
            }
        }
    }
    0
}

fn run_json(expr: &str) -> i32 {
    let tree = match parse(expr) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", MepError::from(err).describe(expr));
            return 1;
        }
    };
    match mep_ast::to_json(&tree) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_batch_command(args: &BatchArgs) -> i32 {
    let vars = args.vars.table();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => run_batch(BufReader::new(file), &mut out, &vars, args.vars.strict),
            Err(e) => {
                eprintln!("error: cannot read '{}': {e}", path.display());
                return 2;
            }
        },
        None => run_batch(io::stdin().lock(), &mut out, &vars, args.vars.strict),
    };
    let _ = out.flush();

    match result {
        Ok(summary) if summary.succeeded() => 0,
        Ok(summary) => {
            eprintln!("{} of {} expressions failed", summary.failed, summary.total);
            1
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_functions() -> i32 {
    for function in mep_math::FunctionId::NAMED {
        println!("{}", mep_math::name_of(function));
    }
    0
}

fn run_repl(args: &VarArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(args.table(), args.strict);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Eval(args)) => run_eval(&args),
        Some(Command::Render(arg)) => run_render(&arg.expr),
        Some(Command::Tokens(arg)) => run_tokens(&arg.expr),
        Some(Command::Json(arg)) => run_json(&arg.expr),
        Some(Command::Batch(args)) => run_batch_command(&args),
        Some(Command::Repl(args)) => run_repl(&args),
        Some(Command::Functions) => run_functions(),
        None => run_repl(&VarArgs::default()),
    }
}

fn main() {
    std::process::exit(run_cli());
}
