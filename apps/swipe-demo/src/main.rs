use anyhow::{Context, Result};
use swipe_demo::{script, DemoList, ROW_COUNT};
use swipeable::FixedScreen;
use web_time::Instant;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipeable Rows Demo ===");
    println!("{ROW_COUNT} rows, each revealing two steps when swiped left:");
    println!("  - past 80px: blue, arrow-up, \"First Step Right\"");
    println!("  - past 150px: red, arrow-down, \"Second Step Right\"");
    println!("Set RUST_LOG=swipeable=trace to follow every drag sample.");
    println!();

    let screen = FixedScreen::new(390.0, 844.0);
    let mut list = DemoList::new(&screen).context("failed to build demo rows")?;
    let started = Instant::now();

    for gesture in script() {
        let outcome = if gesture.cancel { "cancel" } else { "release" };
        println!(
            "swipe row {} from {} to {} then {outcome}",
            gesture.row, gesture.from_x, gesture.to_x
        );
        if let Some(frame) = list.play(&gesture) {
            println!("  {frame}");
        }
    }

    println!();
    println!(
        "{} frames in {:.2}s",
        list.frames(),
        started.elapsed().as_secs_f32()
    );
    for entry in list.activity().entries() {
        println!("  {entry}");
    }
    Ok(())
}
