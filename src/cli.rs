// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::core::config::{self, ReportConfig};
use crate::core::context::RunContext;
use crate::infra::fs::expand_path;
use crate::reporting::console::print_warning;
use crate::infra::t;
use crate::resolve_locale;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(value) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return Some(value.to_string());
    }
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

/// Arguments carrying the informational run context, shared by both subcommands.
fn context_args(locale: &str) -> [Arg; 3] {
    [
        Arg::new("trigger")
            .long("trigger")
            .help(t!("arg.trigger", locale = locale).to_string())
            .value_name("SOURCE")
            .env("TRIGGER_SOURCE")
            .action(ArgAction::Set),
        Arg::new("max-details")
            .long("max-details")
            .help(t!("arg.max_details", locale = locale).to_string())
            .value_name("COUNT")
            .env("MAX_DETAILS")
            .action(ArgAction::Set),
        Arg::new("headless")
            .long("headless")
            .help(t!("arg.headless", locale = locale).to_string())
            .value_name("FLAG")
            .env("HEADLESS")
            .action(ArgAction::Set),
    ]
}

fn result_file_arg(locale: &str) -> Arg {
    Arg::new("file")
        .help(t!("arg.result_file", locale = locale).to_string())
        .value_name("FILE")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("remates-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help(t!("cli.no_color", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("interpret")
                .about(t!("cmd.interpret_about", locale = locale).to_string())
                .arg(result_file_arg(locale))
                .args(context_args(locale)),
        )
        .subcommand(
            Command::new("summary")
                .about(t!("cmd.summary_about", locale = locale).to_string())
                .arg(result_file_arg(locale))
                .arg(
                    Arg::new("summary-file")
                        .long("summary-file")
                        .help(t!("arg.summary_file", locale = locale).to_string())
                        .value_name("SUMMARY_FILE")
                        .env("GITHUB_STEP_SUMMARY")
                        // An empty GITHUB_STEP_SUMMARY means "no sink", not a usage error.
                        .value_parser(clap::value_parser!(OsString))
                        .action(ArgAction::Set),
                )
                .args(context_args(locale)),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language so help texts are localized.
    let requested_language = pre_parse_language();
    let language = resolve_locale(requested_language.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    if requested_language
        .as_deref()
        .is_some_and(|lang| lang.eq_ignore_ascii_case("auto"))
    {
        println!(
            "🌐 {}",
            t!("cli.language_detected", locale = &language, lang = &language)
        );
    }

    let config_path = matches.get_one::<PathBuf>("config").map(|p| expand_path(p));

    match matches.subcommand() {
        Some(("interpret", sub_matches)) => {
            let settings = config::resolve_config(config_path.as_deref(), &language)?;
            let locale = effective_locale(requested_language.as_deref(), &settings);
            let file = result_file(sub_matches, &settings);
            commands::interpret::execute(&file, &run_context(sub_matches), &locale)?;
        }
        Some(("summary", sub_matches)) => {
            // The summary runs after failures too; a bad config must not fail it.
            let settings = config::resolve_config(config_path.as_deref(), &language)
                .unwrap_or_else(|e| {
                    print_warning(
                        &t!("config.fallback_defaults", locale = &language, error = format!("{:#}", e)),
                    );
                    ReportConfig::default()
                });
            let locale = effective_locale(requested_language.as_deref(), &settings);
            let file = result_file(sub_matches, &settings);
            let sink = sub_matches
                .get_one::<OsString>("summary-file")
                .filter(|p| !p.is_empty())
                .map(|p| expand_path(Path::new(p)));
            commands::summary::execute(&file, sink.as_deref(), &run_context(sub_matches), &locale)?;
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before this.
        }
    }
    Ok(())
}

/// `--lang` wins over the config file's `language`.
fn effective_locale(requested: Option<&str>, settings: &ReportConfig) -> String {
    resolve_locale(requested.or(Some(settings.language.as_str())))
}

fn result_file(matches: &ArgMatches, settings: &ReportConfig) -> PathBuf {
    let raw = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .unwrap_or_else(|| settings.result_file.clone());
    expand_path(&raw)
}

fn run_context(matches: &ArgMatches) -> RunContext {
    RunContext::new(
        matches.get_one::<String>("trigger").cloned(),
        matches.get_one::<String>("max-details").cloned(),
        matches.get_one::<String>("headless").cloned(),
    )
}
