use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use gridfall::core::{Game, Tuning};
use gridfall::input::{should_quit, Keyboard};
use gridfall::term::Renderer;
use gridfall::types::FRAMES_PER_SECOND;

fn main() -> Result<()> {
    let mut renderer = Renderer::new();
    renderer.enter()?;
    let result = run(&mut renderer);
    // Restore the terminal even when the loop errored out.
    renderer.exit()?;
    result
}

fn run(renderer: &mut Renderer) -> Result<()> {
    let frame_duration = Duration::from_nanos(1_000_000_000 / FRAMES_PER_SECOND);
    let mut keyboard = Keyboard::new();
    let mut game = Game::new(Tuning::default(), seed_from_clock());

    let mut next_tick = Instant::now() + frame_duration;
    loop {
        renderer.draw(&game)?;

        // Drain input until the next simulation tick is due.
        loop {
            let now = Instant::now();
            if now >= next_tick {
                break;
            }
            if event::poll(next_tick - now)? {
                if let Event::Key(key) = event::read()? {
                    if should_quit(key) {
                        return Ok(());
                    }
                    keyboard.key_event(key);
                }
            }
        }
        next_tick += frame_duration;

        if game.should_reset() {
            game = Game::new(Tuning::default(), seed_from_clock());
        }
        game.tick(&keyboard.frame());
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
        .unwrap_or(1)
}
