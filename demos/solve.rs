use clap::Parser;

use logic_rs::parser::parse;
use logic_rs::table::{Solver, DEFAULT_MAX_VARIABLES, MAX_VARIABLES_LIMIT};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Boolean expression, e.g. "(A and B) or not C".
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Maximum number of distinct variables.
    #[clap(long, value_name = "INT", default_value_t = DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Enable debug logging.
    #[clap(long)]
    debug: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    color_eyre::eyre::ensure!(
        (1..=MAX_VARIABLES_LIMIT).contains(&args.max_vars),
        "--max-vars must be in 1..={}",
        MAX_VARIABLES_LIMIT
    );
    let solver = Solver::new(args.max_vars);
    let table = solver.solve(&args.expr)?;

    let expr = parse(&args.expr)?;
    println!("f = {}", expr.to_unicode());
    println!();
    print!("{}", table);

    let ones = table.results().filter(|&r| r).count();
    println!();
    println!("{} of {} rows are true", ones, table.len());

    Ok(())
}
