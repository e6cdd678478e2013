//! The interactive action loop.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use cardbox_core::Deck;

use crate::args::Options;
use crate::commands;
use crate::session::Session;

const MENU: &str = "Input the action (add, remove, import, export, ask, exit, log, \
                    hardest card, reset stats):";

/// Drive the action loop until `exit`. Unrecognized actions are silent
/// no-ops. Fails only if the interactive streams do, e.g. when input is
/// exhausted before `exit`.
pub fn run<R: BufRead, W: Write, G: Rng>(
    session: &mut Session<R, W>,
    options: &Options,
    rng: &mut G,
) -> Result<()> {
    let mut deck = Deck::new();

    if let Some(path) = &options.import_path {
        debug!(path = %path, "importing cards at startup");
        commands::import_from(session, &mut deck, Path::new(path))?;
    }

    loop {
        session.say(MENU)?;
        let action = session.read_line()?;

        match action.as_str() {
            "add" => commands::add(session, &mut deck)?,
            "remove" => commands::remove(session, &mut deck)?,
            "import" => commands::import(session, &mut deck)?,
            "export" => commands::export(session, &deck)?,
            "ask" => commands::ask(session, &mut deck, rng)?,
            "log" => commands::save_log(session)?,
            "hardest card" => commands::hardest_card(session, &deck)?,
            "reset stats" => commands::reset_stats(session, &mut deck)?,
            "exit" => {
                session.say("Bye bye!")?;
                if let Some(path) = &options.export_path {
                    debug!(path = %path, "exporting cards at exit");
                    commands::export_to(session, &deck, Path::new(path))?;
                }
                return Ok(());
            }
            _ => {}
        }
    }
}
