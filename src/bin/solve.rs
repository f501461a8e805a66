use clap::Parser;
use headsup::tree::abstraction::BettingAbstraction;
use headsup::tree::builder::TreeBuilder;
use headsup::tree::node::NodeType;
use headsup::tree::node::TerminalKind;

/// build the first solver tree and report its shape
#[derive(Parser)]
struct Args {
    /// node budget; overflowing it is fatal
    #[arg(long, default_value_t = 300_000)]
    max_nodes: usize,
}

fn main() -> anyhow::Result<()> {
    headsup::log();
    let args = Args::parse();

    // keep the first solver tree manageable while still non-trivial
    let abstraction = BettingAbstraction {
        max_raises_per_street: 2,
        bet_sizes_by_street: [vec![0.5, 1.0], vec![0.5, 1.0], vec![1.0], vec![1.0]],
        raise_sizes_by_street: [vec![0.5, 1.0], vec![0.5, 1.0], vec![1.0], vec![1.0]],
        ..BettingAbstraction::default()
    };

    let tree = TreeBuilder::new(abstraction).build(args.max_nodes)?;

    log::info!("tree build complete");
    println!("root_id: {}", tree.root_id);
    println!("total_nodes: {}", tree.node_count());
    println!("decision_nodes: {}", tree.count_of(NodeType::Decision));
    println!("chance_nodes: {}", tree.count_of(NodeType::Chance));
    println!("terminal_nodes: {}", tree.count_of(NodeType::Terminal));
    println!("terminal_fold: {}", tree.terminal_count_of(TerminalKind::Fold));
    println!(
        "terminal_showdown: {}",
        tree.terminal_count_of(TerminalKind::Showdown)
    );

    Ok(())
}
