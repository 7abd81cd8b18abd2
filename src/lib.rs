//! Keeps the previous/next breadcrumb of daily journal notes pointing at the
//! nearest notes that actually exist.

pub mod args;
pub mod breadcrumb;
pub mod config;
pub mod document;
pub mod error;
pub mod formatting;
pub mod index;
pub mod link;
pub mod neighbor;
pub mod note;
pub mod operations;

use crate::args::parse_common;
use crate::breadcrumb::NavLineRewriter;
use crate::config::Settings;
use crate::formatting::{FormatContext, render_table, terminal_columns, truncate_with_ellipsis};
use crate::note::{Vault, resolve_note_arg, today_note_path};
use crate::operations::{FixOutcome, fix_note, fresh_line, load_index, neighbor_rows};
use std::env;
use std::error::Error;

const DEFAULT_LABEL: &str = "Index";

pub fn entry() -> Result<(), Box<dyn Error>> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    let cmd = args.remove(0);
    let mut settings = Settings::from_env()?;

    match cmd.as_str() {
        "fix" => fix_command(args, &mut settings, true)?,
        "check" => fix_command(args, &mut settings, false)?,
        "list" => list_command(args, &mut settings)?,
        "link" => link_command(args, &mut settings)?,
        "path" => println!("{}", settings.vault.display()),
        "help" | "-h" | "--help" => print_help(),
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
        }
    }

    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("DAILY_NAV_LOG", "warn");
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

fn print_help() {
    println!(
        "\
Daily Nav CLI
Usage:
  dn fix [note] [--line N] [--folder NAME]
                                  Recompute the breadcrumb of a daily note (default: today's)
  dn check [note] [--line N] [--folder NAME]
                                  Report a stale breadcrumb without writing (exit 1 when stale)
  dn list [--folder NAME] [--plain]
                                  List daily notes with their previous and next notes
  dn link <note> [--label TEXT] [--folder NAME]
                                  Print a fresh breadcrumb line for a note
  dn path                         Show the vault directory
  dn help                         Show this message

Notes may be given as vault paths (Daily/2024-01-05.md) or bare dates (2024-01-05).

Environment:
  DAILY_NAV_VAULT                 Vault directory (default: current directory)
  DAILY_NAV_FOLDER                Daily notes folder name (default: Daily)
  DAILY_NAV_LINE                  Zero-based breadcrumb line (default: 1)
  DAILY_NAV_LOG                   Log filter, e.g. debug (default: warn)
  NO_COLOR                        Disable colors
"
    );
}

fn target_note(positional: &[String], settings: &Settings) -> Result<String, Box<dyn Error>> {
    match positional {
        [] => Ok(today_note_path(&settings.folder)),
        [one] => Ok(resolve_note_arg(one, &settings.folder)),
        _ => Err("Provide at most one note".into()),
    }
}

fn fix_command(
    args: Vec<String>,
    settings: &mut Settings,
    write: bool,
) -> Result<(), Box<dyn Error>> {
    let command = if write { "fix" } else { "check" };
    let flags = parse_common(args, command, settings)?;
    let ctx = FormatContext::from_env(flags.plain);
    let note = target_note(&flags.positional, settings)?;

    match fix_note(settings, &note, write)? {
        FixOutcome::UpToDate(_) => {
            println!("{} already up to date", ctx.format_note(&note));
        }
        FixOutcome::Rewritten { new, .. } if write => {
            println!("Updated {}", ctx.format_note(&note));
            println!("{}", ctx.format_changed(&new));
        }
        FixOutcome::Rewritten { old, new } => {
            println!("{}", ctx.format_muted(&format!("- {old}")));
            println!("{}", ctx.format_changed(&format!("+ {new}")));
            return Err(format!("Breadcrumb in {note} is stale; run `dn fix`").into());
        }
    }
    Ok(())
}

fn list_command(args: Vec<String>, settings: &mut Settings) -> Result<(), Box<dyn Error>> {
    let flags = parse_common(args, "list", settings)?;
    if !flags.positional.is_empty() {
        return Err("list takes no arguments".into());
    }
    let ctx = FormatContext::from_env(flags.plain);
    let index = load_index(&Vault::new(&settings.vault), &settings.folder)?;
    if index.is_empty() {
        println!("No daily notes in {}/", settings.folder);
        return Ok(());
    }

    let width = (terminal_columns() / 3).max(12);
    let cell = |text: Option<&str>| {
        ctx.format_neighbor(text.map(|t| truncate_with_ellipsis(t, width)).as_deref())
    };
    let headers: Vec<String> = ["Note", "Previous", "Next"]
        .iter()
        .map(|h| ctx.format_header(h))
        .collect();
    let rows: Vec<Vec<String>> = neighbor_rows(&index)
        .iter()
        .map(|row| {
            vec![
                cell(Some(row.path.as_str())),
                cell(row.previous.as_deref()),
                cell(row.next.as_deref()),
            ]
        })
        .collect();
    println!("{}", render_table(&headers, &rows));
    Ok(())
}

fn link_command(args: Vec<String>, settings: &mut Settings) -> Result<(), Box<dyn Error>> {
    let flags = parse_common(args, "link", settings)?;
    let [arg] = flags.positional.as_slice() else {
        return Err("Usage: dn link <note> [--label TEXT]".into());
    };
    let note = resolve_note_arg(arg, &settings.folder);
    let index = load_index(&Vault::new(&settings.vault), &settings.folder)?;
    if !index.contains(&note) {
        return Err(format!("{note} is not a daily note in {}/", settings.folder).into());
    }
    let rewriter = NavLineRewriter::new(&settings.folder);
    let label = flags.label.as_deref().unwrap_or(DEFAULT_LABEL);
    println!("{}", fresh_line(&index, &rewriter, &note, label)?);
    Ok(())
}
