//! Interactive shell: one action per line until `quit` or end of input.

use std::io::{self, BufRead, Write};

use ethiopia_storefront::Action;
use tracing::{debug, warn};

use super::session::{Session, dispatch};

const HELP: &str = "\
Commands:
  add ID | adjust ID DELTA | remove ID | clear | cart | close-cart
  favorite ID | favorites | filter all|mild|medium|hot | search [TEXT]
  sign-in [NAME [EMAIL]] | booking | book DATE TIME | story
  checkout | place-order | contact [NAME] | close | backdrop
  help | quit";

/// Read action lines from `input` and dispatch them, writing prompts to
/// `prompt`.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run<I, W>(session: &mut Session, input: I, mut prompt: W) -> io::Result<()>
where
    I: BufRead,
    W: Write,
{
    write!(prompt, "> ")?;
    prompt.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(prompt, "{HELP}")?,
            command => match command.parse::<Action>() {
                Ok(action) => {
                    if let Err(e) = dispatch(session, action) {
                        debug!(error = %e, "action did not complete");
                    }
                }
                Err(e) => warn!(error = %e, "unrecognised command, type `help`"),
            },
        }
        write!(prompt, "> ")?;
        prompt.flush()?;
    }
    Ok(())
}
