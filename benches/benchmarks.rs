criterion_group! {
    name = benches;
    config = Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_5_cards,
        evaluating_7_cards,
        dealing_hands,
        building_solver_tree,
}
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use headsup::cards::card::Card;
use headsup::cards::evaluator::evaluate_5;
use headsup::cards::evaluator::evaluate_7;
use headsup::gameplay::engine::Engine;
use headsup::tree::abstraction::BettingAbstraction;
use headsup::tree::builder::TreeBuilder;

fn evaluating_5_cards(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hand Evaluation");
    let cards = [
        Card::try_from("Ah").unwrap(),
        Card::try_from("Kh").unwrap(),
        Card::try_from("7d").unwrap(),
        Card::try_from("7c").unwrap(),
        Card::try_from("2s").unwrap(),
    ];
    group.bench_function(BenchmarkId::new("hand evaluation", "5 cards"), |b| {
        b.iter(|| evaluate_5(cards))
    });
    group.finish();
}

fn evaluating_7_cards(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hand Evaluation");
    let hole = [Card::try_from("Ah").unwrap(), Card::try_from("Kh").unwrap()];
    let board = [
        Card::try_from("Qh").unwrap(),
        Card::try_from("Jh").unwrap(),
        Card::try_from("7d").unwrap(),
        Card::try_from("7c").unwrap(),
        Card::try_from("2s").unwrap(),
    ];
    group.bench_function(BenchmarkId::new("hand evaluation", "7 cards"), |b| {
        b.iter(|| evaluate_7(hole, &board))
    });
    group.finish();
}

fn dealing_hands(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hand Engine");
    let mut engine = Engine::new(headsup::SEED);
    group.bench_function(BenchmarkId::new("engine", "new hand"), |b| {
        b.iter(|| engine.new_hand(headsup::STACK, headsup::S_BLIND, headsup::B_BLIND))
    });
    group.finish();
}

fn building_solver_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Builder");
    group.sample_size(10);
    let builder = TreeBuilder::new(BettingAbstraction {
        max_raises_per_street: 2,
        bet_sizes_by_street: [vec![0.5, 1.0], vec![0.5, 1.0], vec![1.0], vec![1.0]],
        raise_sizes_by_street: [vec![0.5, 1.0], vec![0.5, 1.0], vec![1.0], vec![1.0]],
        ..BettingAbstraction::default()
    });
    group.bench_function(BenchmarkId::new("tree", "solver abstraction"), |b| {
        b.iter(|| builder.build(300_000).expect("within budget"))
    });
    group.finish();
}
