use dialoguer::Input;
use headsup::gameplay::engine::Engine;
use headsup::gameplay::settlement::Outcome;
use headsup::gameplay::settlement::TerminalResult;
use headsup::gameplay::state::State;

const HANDS: usize = 10;

fn main() {
    headsup::log();
    let mode = prompt("Select mode (0=interactive, 1=auto 10 hands)", 1);
    match mode {
        0 => interactive(),
        _ => simulate(),
    }
}

/// integer prompt clamped to [0, hi]
fn prompt(label: &str, hi: usize) -> usize {
    Input::<usize>::new()
        .with_prompt(label)
        .validate_with(move |v: &usize| -> Result<(), String> {
            match *v <= hi {
                true => Ok(()),
                false => Err(format!("enter a number in [0, {}]", hi)),
            }
        })
        .interact_text()
        .expect("read prompt")
}

fn interactive() {
    let mut engine = Engine::new(headsup::SEED);
    let human = prompt("Control which player? (0 or 1)", 1);
    let mut state = engine.new_hand(headsup::STACK, headsup::S_BLIND, headsup::B_BLIND);
    let hole = state.hole_cards()[human];
    log::info!("you control P{}", human);
    log::info!("your hole cards: {} {}", hole[0], hole[1]);

    let mut guard = 0;
    while !state.is_terminal() {
        if guard >= headsup::ACTION_GUARD {
            log::error!("action guard tripped; engine bug suspected");
            std::process::exit(2);
        }
        println!("\n{}", state);
        println!(
            "To act: P{} | To call: {}",
            state.to_act(),
            state.bet_to_call()
        );
        let menu = engine.legal_actions(&state);
        let chosen = if state.to_act() == human {
            for (i, action) in menu.iter().enumerate() {
                println!("  {}: {}", i, action);
            }
            menu[prompt("Choose action index", menu.len() - 1)]
        } else {
            let action = engine.random_legal_action(&state).expect("live hand");
            println!("Opponent chose: {}", action);
            action
        };
        if !engine.apply_action(&mut state, &chosen) {
            log::error!("engine rejected a menu action");
            std::process::exit(1);
        }
        guard += 1;
    }

    report(0, &engine, &state);
}

fn simulate() {
    let mut engine = Engine::new(headsup::SEED);
    let mut folds = 0;
    let mut showdowns = 0;

    for hand in 0..HANDS {
        let mut state = engine.new_hand(headsup::STACK, headsup::S_BLIND, headsup::B_BLIND);
        let mut guard = 0;
        while !state.is_terminal() {
            if guard >= headsup::ACTION_GUARD {
                log::error!("action guard tripped in hand {}", hand);
                std::process::exit(2);
            }
            let action = engine.random_legal_action(&state).expect("live hand");
            if !engine.apply_action(&mut state, &action) {
                log::error!("engine rejected its own action in hand {}", hand);
                std::process::exit(1);
            }
            guard += 1;
        }
        match report(hand, &engine, &state).reason {
            Some(Outcome::Fold) => folds += 1,
            Some(Outcome::Showdown) => showdowns += 1,
            None => unreachable!("report exits on unsettled hands"),
        }
    }

    log::info!("simulated {} hands", HANDS);
    println!("fold outcomes: {}", folds);
    println!("showdown outcomes: {}", showdowns);
}

/// print the terminal state the way the hand ledger reads it
fn report(hand: usize, engine: &Engine, state: &State) -> TerminalResult {
    let result = engine.terminal_payoff(state);
    if !result.is_terminal {
        log::error!("terminal payoff requested on a live hand");
        std::process::exit(3);
    }

    let stacks = state.stacks();
    let committed = state.committed_total();
    let starts = [stacks[0] + committed[0], stacks[1] + committed[1]];
    let settled = [
        starts[0] + result.chip_delta[0],
        starts[1] + result.chip_delta[1],
    ];

    println!("\n=== Hand {} ===", hand + 1);
    println!("{}", state);
    println!("committed: [P0={}, P1={}]", committed[0], committed[1]);
    println!("starting stacks: [P0={}, P1={}]", starts[0], starts[1]);
    println!("settled stacks:  [P0={}, P1={}]", settled[0], settled[1]);
    for p in 0..headsup::N {
        let hole = state.hole_cards()[p];
        println!("hole P{}: {} {}", p, hole[0], hole[1]);
    }
    for action in state.history() {
        println!("  [{}] P{} {}", action.street, action.player, action);
    }
    println!("result: {}", result);
    result
}
