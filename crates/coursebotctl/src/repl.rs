//! REPL - interactive chat loop
//!
//! Reads one message per line, prints every reply with the `[coursebot]`
//! prefix and asks for a star rating after each course completion. An empty
//! line at the rating prompt skips the rating.

use crate::intent_router::is_exit;
use crate::session::{ChatSession, Reply, FAREWELL};
use crate::typing;
use crate::views::help::welcome;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use coursebot_common::config::TypingSettings;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "you> ";
const RATING_PROMPT: &str = "rating (1-5, empty to skip)> ";
const PREFIX: &str = "[coursebot]";

/// Output styling decided once at startup
#[derive(Debug, Clone)]
pub struct ReplStyle {
    pub color: bool,
    pub typing: TypingSettings,
}

impl ReplStyle {
    /// Colors only on a terminal, and never with `NO_COLOR` set
    pub fn detect(typing: TypingSettings) -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color, typing }
    }

    fn prefix(&self) -> String {
        if self.color {
            PREFIX.cyan().bold().to_string()
        } else {
            PREFIX.to_string()
        }
    }

    fn prompt(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Chat on stdin/stdout until EOF or an exit word
pub fn start_repl(session: &mut ChatSession, style: &ReplStyle) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl_loop(
        session,
        stdin.lock(),
        &mut stdout.lock(),
        style,
        || chrono::Local::now().date_naive(),
    )
}

/// Main loop over any line source, with the date supplied per turn
pub fn run_repl_loop<R, W, F>(
    session: &mut ChatSession,
    input: R,
    out: &mut W,
    style: &ReplStyle,
    today: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let mut lines = input.lines();
    say(out, style, welcome())?;

    loop {
        write!(out, "{}", style.prompt(PROMPT))?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line.context("failed to read chat input")?,
            None => break,
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if is_exit(message) {
            say(out, style, FAREWELL)?;
            return Ok(());
        }

        let reply = session.handle(message, today());
        say_all(out, style, &reply)?;

        while session.awaiting_rating().is_some() {
            write!(out, "{}", style.prompt(RATING_PROMPT))?;
            out.flush()?;
            let Some(line) = lines.next() else {
                say_all(out, style, &session.skip_rating())?;
                return Ok(());
            };
            let value = line.context("failed to read rating")?;
            if is_exit(&value) {
                say_all(out, style, &session.skip_rating())?;
                say(out, style, FAREWELL)?;
                return Ok(());
            }
            let reply = if value.trim().is_empty() {
                session.skip_rating()
            } else {
                session.submit_rating(&value)
            };
            say_all(out, style, &reply)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn say_all<W: Write>(out: &mut W, style: &ReplStyle, reply: &Reply) -> Result<()> {
    for message in &reply.messages {
        say(out, style, message)?;
    }
    Ok(())
}

fn say<W: Write>(out: &mut W, style: &ReplStyle, text: &str) -> Result<()> {
    write!(out, "{} ", style.prefix())?;
    typing::play(out, text, &style.typing).context("failed to write reply")?;
    writeln!(out)?;
    Ok(())
}
