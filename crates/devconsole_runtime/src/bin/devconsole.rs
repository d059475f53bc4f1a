//! devconsole CLI entry point.

use devconsole_foundation::Result as ConsoleResult;
use devconsole_runtime::{
    Command, CommandContext, CommandRegistry, ConsoleConfig, Repl, register_builtins,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    start_closed: bool,
    dump_dir: Option<PathBuf>,
    prompt: Option<String>,
}

/// Sample command shipped with the binary.
struct HelloWorldCommand;

impl Command for HelloWorldCommand {
    fn names(&self) -> &[&str] {
        // Case doesn't matter; lookups ignore it.
        &["HelloWorld", "hw"]
    }

    fn help(&self) -> &str {
        "Prints out \"Hello World\" to the console."
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _parameters: &[String]) -> ConsoleResult<()> {
        ctx.print("Hello World");
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--closed" => config.start_closed = true,
            "--dump-dir" => {
                i += 1;
                if i >= args.len() {
                    return Err("--dump-dir requires a value".into());
                }
                config.dump_dir = Some(PathBuf::from(&args[i]));
            }
            "--prompt" => {
                i += 1;
                if i >= args.len() {
                    return Err("--prompt requires a value".into());
                }
                config.prompt = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

/// Returns `Ok(false)` when a batch script had failing lines.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("devconsole {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let mut config = ConsoleConfig::default().with_start_open(!cli.start_closed);
    if let Some(dir) = cli.dump_dir {
        config = config.with_dump_directory(dir);
    }
    if let Some(prompt) = cli.prompt {
        config = config.with_prompt(prompt);
    }

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &config);
    registry.register(Arc::new(HelloWorldCommand));

    let mut repl = Repl::new(registry, config)?;

    // Run any script files first
    let mut failures = 0;
    for file in &cli.files {
        failures += repl.run_file(file)?;
    }

    if cli.batch_mode {
        return Ok(failures == 0);
    }

    // Scripts already established context; skip the banner
    if !cli.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(true)
}

fn print_help() {
    println!(
        "\x1b[1mdevconsole\x1b[0m - Developer command console

\x1b[1mUSAGE:\x1b[0m
    devconsole [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command scripts to run before starting the console

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Run scripts and exit (no interactive console)
    --closed            Start with the console closed
    --dump-dir DIR      Directory the dump command writes into
    --prompt P          Prompt shown while the console is open

\x1b[1mCONSOLE:\x1b[0m
    `                   Open or close the console
    help [command]      List commands, or show help for one
    echo <args...>      Print the arguments
    clear               Clear the console
    dump [file]         Save the console text to a file
    Ctrl+D              Exit
    Ctrl+C              Cancel current input

Set RUST_LOG=debug to trace registration and dispatch."
    );
}
