//! Hinterland -- a graph Voronoi territory game runner.
//!
//! Loads a graph from an edge-list file (or generates a random one),
//! plays one match between two named strategies, and prints the match
//! record as JSON on stdout. Progress goes to stderr.

use std::process::ExitCode;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use hinterland::board::TokenBoard;
use hinterland::driver::play_match;
use hinterland::graph::{load_graph, Graph};
use hinterland::strategy::{
    ContestedGreedy, MonteCarloStrategy, NeighborGreedy, RandomStrategy, Strategy,
};

const USAGE: &str = "usage: hinterland (<graph-file> | --random <n> <p>) \
[--one <strategy>] [--two <strategy>] [--turns <t>] [--seed <s>] [--max-value <m>] [--quiet]
strategies: random, greedy, greedy2, montecarlo";

/// Parsed command-line options.
struct Options {
    graph_file: Option<String>,
    random: Option<(usize, f64)>,
    one: String,
    two: String,
    turns: u32,
    seed: u64,
    max_value: u32,
    quiet: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Options, String> {
        let mut opts = Options {
            graph_file: None,
            random: None,
            one: "montecarlo".to_string(),
            two: "greedy".to_string(),
            turns: 5,
            seed: 0,
            max_value: 10,
            quiet: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut next = |what: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| format!("missing value for {}", what))
            };
            match arg.as_str() {
                "--random" => {
                    let n = next("--random n")?
                        .parse::<usize>()
                        .map_err(|e| format!("bad vertex count: {}", e))?;
                    let p = next("--random p")?
                        .parse::<f64>()
                        .map_err(|e| format!("bad edge probability: {}", e))?;
                    opts.random = Some((n, p));
                }
                "--one" => opts.one = next("--one")?,
                "--two" => opts.two = next("--two")?,
                "--turns" => {
                    opts.turns = next("--turns")?
                        .parse()
                        .map_err(|e| format!("bad turn count: {}", e))?;
                }
                "--seed" => {
                    opts.seed = next("--seed")?
                        .parse()
                        .map_err(|e| format!("bad seed: {}", e))?;
                }
                "--max-value" => {
                    opts.max_value = next("--max-value")?
                        .parse()
                        .map_err(|e| format!("bad max value: {}", e))?;
                }
                "--quiet" => opts.quiet = true,
                other if !other.starts_with("--") && opts.graph_file.is_none() => {
                    opts.graph_file = Some(other.to_string());
                }
                other => return Err(format!("unknown argument: {}", other)),
            }
        }

        if opts.graph_file.is_none() && opts.random.is_none() {
            return Err("need a graph file or --random".to_string());
        }
        Ok(opts)
    }
}

/// Builds a strategy by name. Seeded strategies derive from the match
/// seed plus a per-player offset so the two sides never share RNG state.
fn make_strategy(name: &str, seed: u64) -> Result<Box<dyn Strategy>, String> {
    match name {
        "random" => Ok(Box::new(RandomStrategy::seeded(seed))),
        "greedy" => Ok(Box::new(NeighborGreedy)),
        "greedy2" => Ok(Box::new(ContestedGreedy)),
        "montecarlo" => Ok(Box::new(MonteCarloStrategy::seeded(seed))),
        other => Err(format!("unknown strategy: {}", other)),
    }
}

fn run(opts: &Options) -> Result<(), String> {
    let seed = if opts.seed != 0 {
        opts.seed
    } else {
        rand::random()
    };
    let mut rng = SmallRng::seed_from_u64(seed);

    let graph = match (&opts.graph_file, opts.random) {
        (Some(path), _) => load_graph(path).map_err(|e| e.to_string())?,
        (None, Some((n, p))) => Graph::random(n, p, &mut rng),
        (None, None) => unreachable!("Options::parse requires a graph source"),
    };
    let mut board = TokenBoard::with_random_values(graph, opts.max_value, &mut rng);

    let mut one = make_strategy(&opts.one, seed.wrapping_add(1))?;
    let mut two = make_strategy(&opts.two, seed.wrapping_add(2))?;

    if !opts.quiet {
        eprintln!(
            "{} vs {}, {} turns each, seed {}",
            opts.one, opts.two, opts.turns, seed
        );
    }
    let record = play_match(&mut board, &mut *one, &mut *two, opts.turns, opts.quiet);

    let json = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match Options::parse(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = run(&opts) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
