pub mod api;
pub mod cards;
pub mod gameplay;
pub mod tree;

/// chip counts are signed so settlement deltas reuse the same unit
pub type Chips = i32;

// heads-up game parameters
pub const N: usize = 2;
pub const STACK: Chips = 1000;
pub const S_BLIND: Chips = 5;
pub const B_BLIND: Chips = 10;

/// pot fractions offered by the dealt-hand engine when sizing bets and raises
pub const POT_FRACTIONS: [f64; 3] = [0.5, 1.0, 2.0];

/// ceiling on actions per hand before the drivers declare an engine bug
pub const ACTION_GUARD: usize = 200;

/// default rng seed shared by the binaries
pub const SEED: u64 = 1337;

/// trait for random generation, mostly exercised by tests
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize logging
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
