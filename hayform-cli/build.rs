use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the entry types from hayform-babel's EntryType::ALL
// We need to duplicate this here since build scripts can't access the library
const ENTRY_TYPES: &[&str] = &[
    "anthology",
    "anthos",
    "article",
    "artwork",
    "audio",
    "blog",
    "book",
    "case",
    "chapter",
    "conference",
    "entry",
    "exhibition",
    "legislation",
    "manuscript",
    "misc",
    "newspaper",
    "original",
    "patent",
    "performance",
    "periodical",
    "post",
    "proceedings",
    "reference",
    "report",
    "repository",
    "scene",
    "thesis",
    "thread",
    "video",
    "web",
];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Record file (JSON or YAML)")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Record format")
        .value_parser(["json", "yaml"])
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("hayform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build Hayagriva bibliography entries from records")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List entry types and their default parents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-roles")
                .long("list-roles")
                .help("List contributor roles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a hayform.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("emit")
                .about("Emit the YAML document for a record")
                .arg(input_arg())
                .arg(from_arg())
                .arg(Arg::new("label").long("label").help("Citation label"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report constraint violations of a record")
                .arg(input_arg())
                .arg(from_arg()),
        )
        .subcommand(
            Command::new("new")
                .about("Print a blank record")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("Entry type")
                        .value_parser(clap::builder::PossibleValuesParser::new(ENTRY_TYPES)),
                )
                .arg(
                    Arg::new("parents")
                        .long("parents")
                        .help("Number of parents to attach"),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "hayform", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "hayform", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "hayform", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
