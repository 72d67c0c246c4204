//! Command-line front end.
//!
//! A thin adapter over the session: parse flags by hand, load the photo,
//! fill the caption table, pick a text backend and run merge + export.

use std::path::PathBuf;
use thiserror::Error;

use super::{export_session, Session};
use crate::overlay::{KEY_DATE, KEY_LOCATION, KEY_NOTE, KEY_PROJECT, KEY_WORK_TYPE};
use crate::rendering::{
    get_font_with_config, FixedAdvanceBackend, FontConfig, GlyphBackend, TextBackend,
};

pub const USAGE: &str = "\
Usage: sitestamp <photo> [options]

Stamps the photo with the five-row caption table and writes
{index_}{날짜}_{공사명}.jpg next to it (or into --out).

Options:
  --project <text>    공사명 value (required for export)
  --location <text>   위치 value
  --date <text>       날짜 value (required for export)
  --work <text>       공종 value
  --note <text>       내용 value
  --out <dir>         output directory (default: current directory)
  --font <path>       font file to render with (.ttf/.otf/.ttc)
  --index <n>         number prefixed to the exported filename
  --no-wrap           draw each value on a single line
  -h, --help          show this help";

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("no photo given; run with --help for usage")]
    MissingPhoto,

    #[error("option {0} expects a value")]
    MissingValue(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("--index expects a number, got '{0}'")]
    InvalidIndex(String),

    #[error("unexpected extra argument: {0}")]
    ExtraArgument(String),
}

#[derive(Debug, PartialEq)]
pub struct RunArgs {
    pub photo: PathBuf,
    pub project: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub work_type: Option<String>,
    pub note: Option<String>,
    pub out_dir: PathBuf,
    pub font: Option<PathBuf>,
    pub index: Option<usize>,
    pub wrap: bool,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Box<RunArgs>),
    Help,
}

pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut photo: Option<PathBuf> = None;
    let mut project = None;
    let mut location = None;
    let mut date = None;
    let mut work_type = None;
    let mut note = None;
    let mut out_dir = PathBuf::from(".");
    let mut font = None;
    let mut index = None;
    let mut wrap = true;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut take_value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| CliError::MissingValue(flag.to_string()))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--project" => project = Some(take_value("--project")?),
            "--location" => location = Some(take_value("--location")?),
            "--date" => date = Some(take_value("--date")?),
            "--work" => work_type = Some(take_value("--work")?),
            "--note" => note = Some(take_value("--note")?),
            "--out" => out_dir = PathBuf::from(take_value("--out")?),
            "--font" => font = Some(PathBuf::from(take_value("--font")?)),
            "--index" => {
                let raw = take_value("--index")?;
                index = Some(raw.parse().map_err(|_| CliError::InvalidIndex(raw))?);
            }
            "--no-wrap" => wrap = false,
            other if other.starts_with('-') => {
                return Err(CliError::UnknownOption(other.to_string()))
            }
            other => {
                if photo.is_some() {
                    return Err(CliError::ExtraArgument(other.to_string()));
                }
                photo = Some(PathBuf::from(other));
            }
        }
    }

    let photo = photo.ok_or(CliError::MissingPhoto)?;
    Ok(Command::Run(Box::new(RunArgs {
        photo,
        project,
        location,
        date,
        work_type,
        note,
        out_dir,
        font,
        index,
        wrap,
    })))
}

/// Parse, annotate, export. The binary's whole job.
pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args(args)? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let mut session = Session::new();
    session.config.wrap_values = args.wrap;
    session.add_photo(&args.photo)?;
    if let Some(index) = args.index {
        session.renumber_current(index);
    }

    let values = [
        (KEY_PROJECT, &args.project),
        (KEY_LOCATION, &args.location),
        (KEY_DATE, &args.date),
        (KEY_WORK_TYPE, &args.work_type),
        (KEY_NOTE, &args.note),
    ];
    for (key, value) in values {
        if let Some(value) = value {
            session.table.set_value_for(key, value.clone());
        }
    }

    let font_config = FontConfig {
        custom_font_path: args.font.clone(),
    };
    let backend: Box<dyn TextBackend> = match get_font_with_config(&font_config) {
        Some(font) => Box::new(GlyphBackend::new(font)),
        None => {
            eprintln!("no usable font found; rendering with placeholder glyphs");
            Box::new(FixedAdvanceBackend::new())
        }
    };

    session.merge_table(backend.as_ref())?;
    let written = export_session(&session, &args.out_dir)?;
    println!("saved {}", written.display());
    Ok(())
}
