//! Dance Evolution name tool
//!
//! Usage:
//!   danevo map "Mike123"
//!   danevo check "Ｍｉｋｅ" --raw
//!   danevo edit --name "ＤＡＮＣＥＲ" --version 1 < keystrokes.txt

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use danevo::{
    name_mapper, name_validator, new_session, profile_store, DanevoConfig, EditOutcome,
    NameEditSession,
};

#[derive(Parser)]
#[command(name = "danevo")]
#[command(about = "Transcode and validate Dance Evolution profile names")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cabinet-native form of keyboard text
    Map { text: String },

    /// Validate a name, mapping it first unless --raw
    Check {
        text: String,

        /// Validate the text as given, without mapping
        #[arg(long)]
        raw: bool,
    },

    /// Drive an edit session from stdin.
    ///
    /// Each line is the full field value. `:edit`, `:save`, `:cancel` and
    /// `:show` are commands.
    Edit {
        /// Name currently on file
        #[arg(short, long, default_value = "")]
        name: String,

        /// Profile version tag
        #[arg(short, long, default_value_t = 1)]
        version: u32,

        /// Print the session context as JSON after each line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DanevoConfig::load_toml(path)?,
        None => DanevoConfig::default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Map { text } => {
            println!("{}", name_mapper().map_str(&text));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { text, raw } => {
            if check_name(&config, &text, raw, &mut io::stdout().lock())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Edit {
            name,
            version,
            json,
        } => {
            let stdin = io::stdin();
            run_edit(
                &config,
                name,
                version,
                json,
                stdin.lock(),
                &mut io::stdout().lock(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print the verdict for `text`; returns whether it is a valid name.
fn check_name(config: &DanevoConfig, text: &str, raw: bool, out: &mut impl Write) -> Result<bool> {
    let candidate = if raw {
        text.to_string()
    } else {
        name_mapper().map_str(text)
    };
    match name_validator(config).check(&candidate) {
        Ok(()) => {
            writeln!(out, "ok: {}", candidate)?;
            Ok(true)
        }
        Err(reason) => {
            writeln!(out, "invalid: {}", reason)?;
            Ok(false)
        }
    }
}

/// Replay `input` line by line against a session backed by an in-memory store.
fn run_edit(
    config: &DanevoConfig,
    name: String,
    version: u32,
    json: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut store = profile_store(config);
    store.insert_profile(version, name.clone());
    let mut session = new_session(config, version, name);

    for line in input.lines() {
        let line = line?;
        match line.as_str() {
            ":edit" => {
                if !session.begin_edit() {
                    writeln!(out, "! not viewing")?;
                }
            }
            ":cancel" => {
                if !session.cancel() {
                    writeln!(out, "! not editing")?;
                }
            }
            ":save" => match session.commit_with(&mut store) {
                Some(Ok(saved)) => writeln!(out, "saved: {}", saved.name)?,
                Some(Err(err)) => writeln!(out, "! save failed: {}", err)?,
                None => writeln!(out, "! not editing")?,
            },
            ":show" => {}
            raw => match session.keystroke(raw) {
                EditOutcome::Accepted => {}
                EditOutcome::Rejected => writeln!(out, "! rejected")?,
                EditOutcome::Ignored => writeln!(out, "! not editing")?,
            },
        }
        report(out, &session, json)?;
    }
    Ok(())
}

fn report(out: &mut impl Write, session: &NameEditSession, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", session.context().to_json()?)?;
    } else {
        let ctx = session.context();
        writeln!(
            out,
            "[{:?}] {} ({}/{}) committed={}",
            ctx.state, ctx.buffer, ctx.length, ctx.max_length, ctx.committed
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(name: &str, script: &str) -> Vec<String> {
        let mut out = Vec::new();
        run_edit(
            &DanevoConfig::default(),
            name.to_string(),
            1,
            false,
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_edit_and_save() {
        let lines = edit("", ":edit\nMike\n:save\n");
        assert_eq!(
            lines,
            vec![
                "[Editing]  (0/10) committed=",
                "[Editing] Ｍｉｋｅ (4/10) committed=",
                "saved: Ｍｉｋｅ",
                "[Viewing] Ｍｉｋｅ (4/10) committed=Ｍｉｋｅ",
            ]
        );
    }

    #[test]
    fn test_rejected_line_keeps_buffer() {
        let lines = edit("", ":edit\nab\nab&\nabcdefghijk\n");
        assert_eq!(lines[2], "! rejected");
        assert_eq!(lines[3], "[Editing] ａｂ (2/10) committed=");
        assert_eq!(lines[4], "! rejected");
        assert_eq!(lines[5], "[Editing] ａｂ (2/10) committed=");
    }

    #[test]
    fn test_commands_outside_editing() {
        let lines = edit("ＯＬＤ", "Mike\n:save\n:cancel\n:show\n");
        assert_eq!(
            lines,
            vec![
                "! not editing",
                "[Viewing] ＯＬＤ (3/10) committed=ＯＬＤ",
                "! not editing",
                "[Viewing] ＯＬＤ (3/10) committed=ＯＬＤ",
                "! not editing",
                "[Viewing] ＯＬＤ (3/10) committed=ＯＬＤ",
                "[Viewing] ＯＬＤ (3/10) committed=ＯＬＤ",
            ]
        );
    }

    #[test]
    fn test_edit_twice_and_cancel() {
        let lines = edit("ＯＬＤ", ":edit\n:edit\nNEW\n:cancel\n");
        assert_eq!(lines[1], "! not viewing");
        assert_eq!(lines[3], "[Editing] ＮＥＷ (3/10) committed=ＯＬＤ");
        assert_eq!(lines[4], "[Viewing] ＯＬＤ (3/10) committed=ＯＬＤ");
    }

    #[test]
    fn test_failed_save_stays_editing() {
        let lines = edit("ＯＬＤ", ":edit\n\n:save\n");
        assert_eq!(lines[2], "! save failed: name is shorter than 1 characters");
        assert_eq!(lines[3], "[Editing]  (0/10) committed=ＯＬＤ");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        run_edit(
            &DanevoConfig::default(),
            String::new(),
            4,
            true,
            ":edit\nA\n".as_bytes(),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.contains("\"state\":\"Editing\""), "{}", last);
        assert!(last.contains("\"buffer\":\"Ａ\""), "{}", last);
        assert!(last.contains("\"version\":4"), "{}", last);
    }

    #[test]
    fn test_check_reports_validity() {
        let config = DanevoConfig::default();
        let mut out = Vec::new();
        assert!(check_name(&config, "Mike123", false, &mut out).unwrap());
        assert!(!check_name(&config, "Mike", true, &mut out).unwrap());
        assert!(!check_name(&config, "ABCDEFGHIJK", false, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ok: Ｍｉｋｅ１２３");
        assert!(lines[1].starts_with("invalid: character 'M'"), "{}", lines[1]);
        assert_eq!(lines[2], "invalid: name has 11 characters, at most 10 allowed");
    }
}
