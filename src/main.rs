use std::process;
use std::time::SystemTime;

use ringlet::choreography;
use ringlet::countdown::Countdown;
use ringlet::engine::Engine;
use ringlet::page::Page;

/// January 31, 2026 16:00:00 UTC, as unix milliseconds.
const WEDDING_UNIX_MS: i64 = 1_769_875_200_000;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(42);

    let page = Page::standard();
    let mut engine = Engine::new().with_seed(seed).with_page(&page);
    choreography::install(engine.timeline_mut(), &page);

    let countdown = Countdown::new(WEDDING_UNIX_MS);

    if let Err(e) = ringlet::window::run(engine, countdown) {
        log::error!("{}", e);
        process::exit(1);
    }
}
