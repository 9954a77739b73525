use clap::Parser;

use logic_rs::gate::GateKind;
use logic_rs::table::gate_truth_table;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Gates to show (AND, OR, NOT, XOR, NAND, NOR, IMPLY). Shows all if omitted.
    #[arg(value_name = "GATE")]
    gates: Vec<GateKind>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let gates = if args.gates.is_empty() {
        GateKind::ALL.to_vec()
    } else {
        args.gates
    };

    for kind in gates {
        println!("{} ({}) {}: {}", kind, kind.symbol(), kind.name(), kind.description());
        print!("{}", gate_truth_table(kind));
        println!();
    }

    Ok(())
}
