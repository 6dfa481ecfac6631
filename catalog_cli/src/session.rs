use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use catalog_core::{Catalog, EnrichedProduct, FilterAction, FilterState, UserId};
use tracing::debug;

use crate::render::render;

pub const HELP: &str = "\
commands:
  user <id>      select a user, or clear the user filter if already selected
  search <text>  show products whose name contains <text>
  clear          clear the search
  reset          clear all filters
  help           show this message
  quit           leave";

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Apply(FilterAction),
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to None.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let command = match word {
        "" => return Ok(None),
        "user" => {
            let id = rest.trim();
            if id.is_empty() {
                bail!("user needs an ID");
            }
            let id = id.parse().map_err(|_| anyhow!("'{}' is not a user ID", id))?;
            SessionCommand::Apply(FilterAction::ToggleUser(UserId(id)))
        }
        // everything after the separator is the search text, inner spaces
        // included
        "search" => SessionCommand::Apply(FilterAction::EditSearch(
            rest.trim_end_matches(['\r', '\n']).to_string(),
        )),
        "clear" => SessionCommand::Apply(FilterAction::ClearSearch),
        "reset" => SessionCommand::Apply(FilterAction::ResetAll),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => bail!("unknown command '{}'", other),
    };
    Ok(Some(command))
}

/// Runs an interactive session until `quit` or the end of the input. The
/// table is rendered once at the start and again after every filter change.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    catalog: &Catalog,
    products: &[EnrichedProduct<'_>],
) -> Result<()> {
    let mut state = FilterState::new();
    render(&mut output, catalog.users(), &state, &state.filter(products))?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);
        match parse_command(line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Help)) => writeln!(output, "{}", HELP)?,
            Ok(Some(SessionCommand::Apply(action))) => {
                debug!(?action, "applying filter action");
                state = state.apply(action);
                writeln!(output)?;
                render(&mut output, catalog.users(), &state, &state.filter(products))?;
            }
            Err(err) => writeln!(output, "{}\n{}", err, HELP)?,
        }
    }
    output.flush()?;
    Ok(())
}
