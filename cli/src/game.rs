use pushbox_core::{Session, SessionState};
use std::io::BufRead;

use crate::config::KeyBindings;
use crate::input::Keys;
use crate::render::Renderer;

/// Runs the turn loop until the session ends or the input is closed.
pub fn play<R: BufRead>(
    session: &mut Session,
    keys: &mut Keys<R>,
    bindings: &KeyBindings,
    renderer: &mut impl Renderer,
) -> anyhow::Result<SessionState> {
    renderer.draw(session.grid())?;

    while !session.is_finished() {
        let grid = session.grid();
        renderer.message(&format!(
            "{} of {} blocks left. {}",
            grid.misplaced_blocks(),
            grid.block_count(),
            bindings.prompt()
        ))?;
        let Some(key) = keys.next_key()? else {
            log::info!("Input closed before the stage was cleared");
            break;
        };

        let command = bindings.command(key);
        let outcome = session.apply(command)?;
        log::debug!("{:?} -> {:?}", command, outcome);

        renderer.draw(session.grid())?;
    }

    match session.state() {
        SessionState::Cleared => renderer.message("Congratulations! You win.")?,
        SessionState::Quit => renderer.message("Bye.")?,
        SessionState::Playing => {}
    }

    Ok(session.state())
}
