//! Command-line interface for strlit
//! This binary runs the copy/paste literal transforms over a source file, which is handy for
//! checking what an editor integration would put on the clipboard or insert into a buffer.
//!
//! Usage:
//!   strlit copy `<path>` --range `<start..end>` [--range ...] [--json]
//!   strlit paste `<path>` --at `<offset|start..end>` --text `<text>` [--raw `<raw>`]
//!   strlit classify `<path>` --at `<offset>` [--json]
//!
//! Global options: --config `<file>` layers a TOML config over the defaults, and
//! --operator-position overrides where `+` goes when a pasted string is split.

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn build_cli() -> Command {
    let path_arg = Arg::new("path")
        .help("Path to the source file")
        .required(true)
        .index(1);
    let json_arg = Arg::new("json")
        .long("json")
        .help("Print the result as JSON")
        .action(ArgAction::SetTrue);

    Command::new("strlit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape-aware copy/paste transforms for string and character literals")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("operator-position")
                .long("operator-position")
                .global(true)
                .value_parser(["before-newline", "after-newline"])
                .help("Where `+` goes when pasted text is split into string fragments"),
        )
        .subcommand(
            Command::new("copy")
                .about("Print the clipboard text for one or more selections")
                .arg(path_arg.clone())
                .arg(
                    Arg::new("range")
                        .long("range")
                        .short('r')
                        .required(true)
                        .action(ArgAction::Append)
                        .help("Selected byte range START..END; repeat for block selection"),
                )
                .arg(json_arg.clone()),
        )
        .subcommand(
            Command::new("paste")
                .about("Print the text that pasting would insert")
                .arg(path_arg.clone())
                .arg(
                    Arg::new("at")
                        .long("at")
                        .required(true)
                        .help("Caret offset, or the selected range START..END being replaced"),
                )
                .arg(
                    Arg::new("text")
                        .long("text")
                        .short('t')
                        .required(true)
                        .help("Clipboard text to paste"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Raw source text captured at copy time (verbatim side channel)"),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Print the literal token at an offset")
                .arg(path_arg)
                .arg(
                    Arg::new("at")
                        .long("at")
                        .required(true)
                        .help("Byte offset into the source file"),
                )
                .arg(json_arg),
        )
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strlit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), commands::CliError> {
    let config = commands::load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches
            .get_one::<String>("operator-position")
            .map(String::as_str),
    )?;

    let output = match matches.subcommand() {
        Some(("copy", sub)) => {
            let ranges: Vec<&str> = sub
                .get_many::<String>("range")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            commands::handle_copy_command(
                &config,
                required(sub, "path")?,
                &ranges,
                sub.get_flag("json"),
            )?
        }
        Some(("paste", sub)) => commands::handle_paste_command(
            &config,
            required(sub, "path")?,
            required(sub, "at")?,
            required(sub, "text")?,
            sub.get_one::<String>("raw").map(String::as_str),
        )?,
        Some(("classify", sub)) => commands::handle_classify_command(
            required(sub, "path")?,
            required(sub, "at")?,
            sub.get_flag("json"),
        )?,
        Some((name, _)) => return Err(commands::CliError::UnknownCommand(name.to_string())),
        None => return Err(commands::CliError::UnknownCommand(String::new())),
    };

    print!("{}", output);
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, commands::CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| commands::CliError::MissingArgument(name.to_string()))
}
