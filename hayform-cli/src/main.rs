// Command-line interface for hayform
//
// This binary turns bibliography records into Hayagriva YAML documents, running them through
// the same form constraints and recompute cycle the interactive editor uses.
//
// A record is the editor's model (label + entry tree) saved as JSON or YAML. The command layer
// lives in commands.rs; this file only parses arguments, loads configuration, reads and writes
// files and maps failures to exit codes.
//
// Usage:
//  hayform <input> [--label <label>] [--from <format>] [--output <file>]  - Emit YAML (default)
//  hayform emit <input> ...                       - Same as above (explicit)
//  hayform check <input> [--from <format>]        - Report constraint violations
//  hayform new [--type <type>] [--parents <n>]    - Print a blank record
//  hayform --list-types | --list-roles            - List entry types or contributor roles
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> <value>.
// The CLI layer strips the "extra-" prefix and applies the value on top of hayform.toml.
// Example:
//  hayform entry.json --extra-default-label untitled --extra-enforce-patterns false

mod commands;

use clap::{Arg, ArgAction, Command, ValueHint};
use commands::Settings;
use hayform_babel::model::EntryType;
use hayform_babel::{Record, RecordFormat};
use hayform_config::{HayformConfig, Loader};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SUBCOMMANDS: &[&str] = &["emit", "check", "new", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

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
        .help("Record format (auto-detected from file extension if not specified)")
        .value_parser(["json", "yaml"])
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("hayform")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build Hayagriva bibliography entries from records")
        .long_about(
            "hayform turns bibliography records into Hayagriva YAML.\n\n\
            Commands:\n  \
            - emit:  Validate a record and print its YAML document (default)\n  \
            - check: Report the fields that keep a record from being emitted\n  \
            - new:   Print a blank record to start from\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            hayform entry.json                       # Print the YAML document\n  \
            hayform entry.yaml -o refs.yml           # Write it to a file\n  \
            hayform check entry.json                 # List violations\n  \
            hayform new --type chapter --parents 1   # Chapter with a book parent",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List entry types and their default parents")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-roles")
                .long("list-roles")
                .help("List contributor roles")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a hayform.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("emit")
                .about("Emit the YAML document for a record (default command)")
                .long_about(
                    "Run a record through the entry form and print its Hayagriva YAML.\n\n\
                    Resolver prefixes (https://doi.org/, ...) are stripped from serial numbers\n\
                    first. If any field violates its constraint, the violations are printed\n\
                    instead and the command fails.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("label")
                        .long("label")
                        .help("Citation label (overrides the record's label)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
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
                .about("Print a blank record (JSON)")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("Entry type (defaults to record.default_type)")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            EntryType::ALL.map(|entry_type| entry_type.as_str()),
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("parents")
                        .long("parents")
                        .help("Number of parents to attach along the default-parent chain")
                        .default_value("0")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // No subcommand given: treat the first argument as an input file for "emit"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "emit".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-types") {
        print!("{}", commands::list_types());
        return;
    }
    if matches.get_flag("list-roles") {
        print!("{}", commands::list_roles());
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown parameter --extra-{key}");
        std::process::exit(1);
    }

    init_logging(&config);
    let settings = settings_from_config(&config);

    match matches.subcommand() {
        Some(("emit", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let label = sub_matches.get_one::<String>("label").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_emit_command(input, from, label, output, &settings);
        }
        Some(("check", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            handle_check_command(input, from, &settings);
        }
        Some(("new", sub_matches)) => {
            let entry_type = match sub_matches.get_one::<String>("type") {
                Some(name) => parse_entry_type(name),
                None => settings.defaults.default_type,
            };
            let parents = sub_matches.get_one::<usize>("parents").copied().unwrap_or(0);
            handle_new_command(entry_type, parents);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value,
        None => {
            eprintln!("Missing required argument <{id}>");
            std::process::exit(1);
        }
    }
}

fn read_record(input: &str, from: Option<&str>) -> Record {
    let format = commands::resolve_format(input, from).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    debug!(input, format = format.name(), "reading record");
    commands::load_record(&source, format).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Handle the emit command
fn handle_emit_command(
    input: &str,
    from: Option<&str>,
    label: Option<&str>,
    output: Option<&str>,
    settings: &Settings,
) {
    let mut record = read_record(input, from);
    if let Some(label) = label {
        record.label = label.to_string();
    }

    let document = commands::emit_record(record, settings).unwrap_or_else(|violations| {
        eprintln!("Record '{input}' is not valid:");
        eprint!("{}", commands::format_violations(&violations));
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, document).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{document}"),
    }
}

/// Handle the check command
fn handle_check_command(input: &str, from: Option<&str>, settings: &Settings) {
    let mut record = read_record(input, from);
    record.entry.strip_serial_prefixes(&settings.prefixes);

    let violations = commands::check_record(&record, settings.rules);
    if violations.is_empty() {
        println!("valid");
    } else {
        print!("{}", commands::format_violations(&violations));
        std::process::exit(1);
    }
}

/// Handle the new command
fn handle_new_command(entry_type: EntryType, parents: usize) {
    let record = commands::template_record(entry_type, parents);
    let text = RecordFormat::Json.serialize(&record).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    print!("{text}");
}

fn load_cli_config(explicit_path: Option<&str>) -> HayformConfig {
    let loader = Loader::new().with_optional_file("hayform.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(config: &HayformConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn settings_from_config(config: &HayformConfig) -> Settings {
    Settings {
        defaults: (&config.record).into(),
        prefixes: (&config.serial).into(),
        rules: (&config.check).into(),
    }
}

fn apply_config_overrides(config: &mut HayformConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(label) = take_override(extra_params, &["default-label"]) {
        config.record.default_label = label;
    }
    if let Some(raw) = take_override(extra_params, &["default-type"]) {
        config.record.default_type = parse_entry_type(&raw);
    }
    if let Some(raw) = take_override(extra_params, &["enforce-patterns"]) {
        config.check.enforce_patterns = parse_bool_arg("enforce-patterns", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["strip-prefixes"]) {
        config.serial.strip_prefixes = raw
            .split(',')
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_string)
            .collect();
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_entry_type(raw: &str) -> EntryType {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hayform_babel::model::ResolverPrefixes;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let args = args(&["hayform", "emit", "entry.json"]);
        let (cleaned, extra) = parse_extra_args(&args);

        assert_eq!(cleaned, args);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "hayform",
            "emit",
            "entry.json",
            "--extra-default-label",
            "untitled",
            "--from",
            "json",
        ]));

        assert_eq!(
            cleaned,
            args(&["hayform", "emit", "entry.json", "--from", "json"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("default-label"), Some(&"untitled".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "hayform",
            "check",
            "entry.json",
            "--extra-enforce-patterns",
        ]));

        assert_eq!(cleaned, args(&["hayform", "check", "entry.json"]));
        assert_eq!(extra.get("enforce-patterns"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "hayform",
            "entry.yaml",
            "--extras-default-type",
            "book",
            "--extra-enforce-patterns",
            "--extra-strip-prefixes",
            "doi:",
        ]));

        assert_eq!(cleaned, args(&["hayform", "entry.yaml"]));
        assert_eq!(extra.len(), 3);
        assert_eq!(extra.get("default-type"), Some(&"book".to_string()));
        assert_eq!(extra.get("enforce-patterns"), Some(&"true".to_string()));
        assert_eq!(extra.get("strip-prefixes"), Some(&"doi:".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_flags() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("default-label".to_string(), "untitled".to_string());
        extras.insert("enforce-patterns".to_string(), "no".to_string());
        extras.insert("default-type".to_string(), "chapter".to_string());
        extras.insert("other".to_string(), "1".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(config.record.default_label, "untitled");
        assert_eq!(config.record.default_type, EntryType::Chapter);
        assert!(!config.check.enforce_patterns);
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("other"));
    }

    #[test]
    fn strip_prefix_override_is_comma_separated() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert(
            "strip-prefixes".to_string(),
            "doi:, https://hdl.handle.net/,".to_string(),
        );

        apply_config_overrides(&mut config, &mut extras);

        let settings = settings_from_config(&config);
        assert_eq!(
            settings.prefixes,
            ResolverPrefixes(vec![
                "doi:".to_string(),
                "https://hdl.handle.net/".to_string()
            ])
        );
    }

    #[test]
    fn settings_follow_configuration() {
        let config = load_cli_config(None);
        let settings = settings_from_config(&config);
        assert_eq!(settings.defaults.default_label, "label");
        assert_eq!(settings.prefixes, ResolverPrefixes::default());
        assert!(settings.rules.enforce_patterns);
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
