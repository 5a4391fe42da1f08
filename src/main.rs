mod cube;
mod error;
mod heuristic;
mod r#move;
mod pattern;
mod solver;
mod symmetry;

mod prelude;
use prelude::*;


#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    /// Build the pattern database and write it as JSON.
    BuildDb {
        #[clap(short, long, value_parser)]
        out: PathBuf,

        #[clap(long)]
        parallel: bool,
    },
    /// Print a random scramble and the cube it produces.
    Scramble {
        #[clap(value_parser, default_value_t = 20)]
        length: usize,
    },
    /// Solve one cube given as moves, symbols, stickers or a random scramble.
    Solve {
        #[clap(flatten)]
        args: SolveArgs,
    },
    /// Solve many random scrambles at once and report the totals.
    Bench {
        #[clap(short, long, value_parser, default_value_t = 8)]
        count: usize,

        #[clap(short, long, value_parser, default_value_t = 12)]
        length: usize,

        #[clap(long, value_parser, default_value = "pair")]
        heuristic: Heuristic,
    },
}

#[derive(clap::Args, Clone)]
struct SolveArgs {
    /// Moves such as "R U' F2" applied to a solved cube.
    #[clap(short, long, value_parser)]
    scramble: Option<String>,

    /// Moves in the one-letter alphabet, lower case counter-clockwise, e.g. "UrFF".
    #[clap(long, value_parser)]
    symbols: Option<String>,

    /// Length of a random scramble.
    #[clap(short, long, value_parser)]
    random: Option<usize>,

    /// Colour letters W G R B O Y, three per corner in slot order ULB URB URF ULF DLF DRF DRB DLB.
    /// Each corner starts from its U or D sticker and goes clockwise.
    #[clap(long, value_parser)]
    stickers: Option<String>,

    /// 0/misplaced, 1/single or 2/pair.
    #[clap(long, value_parser, default_value = "pair")]
    heuristic: Heuristic,

    /// best-first or breadth-first.
    #[clap(long, value_parser, default_value = "best-first")]
    strategy: Strategy,

    #[clap(long)]
    no_symmetry: bool,

    /// Saved pattern database; built in memory when absent.
    #[clap(long, value_parser)]
    db: Option<PathBuf>,
}

impl SolveArgs {
    fn cube(&self) -> anyhow::Result<Cube> {
        match (&self.scramble, &self.symbols, self.random, &self.stickers) {
            (Some(moves), None, None, None) => {
                Ok(Cube::solved().apply_all(Move::parse_sequence(moves)?))
            }
            (None, Some(symbols), None, None) => {
                Ok(Cube::solved().apply_all(Move::parse_symbols(symbols)?))
            }
            (None, None, Some(length), None) => {
                let moves = random_scramble(length);
                println!("Scramble: {}", format_route(&moves));
                Ok(Cube::solved().apply_all(moves))
            }
            (None, None, None, Some(stickers)) => {
                Ok(Cube::from_stickers(&parse_stickers(stickers)?)?)
            }
            _ => anyhow::bail!("Give exactly one of --scramble, --symbols, --random or --stickers"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    match Cli::parse() {
        Cli::BuildDb { out, parallel } => {
            let db = if parallel {
                PatternDatabase::build_parallel()
            } else {
                PatternDatabase::build()
            };
            db.save_to_path(&out)?;
            log::info!("Wrote {}", out.display());
        }
        Cli::Scramble { length } => {
            let moves = random_scramble(length);
            let cube = Cube::solved().apply_all(moves.iter().copied());
            println!("{}", format_route(&moves));
            println!("{}", cube);
            println!("Stickers: {}", format_stickers(&cube.stickers()));
        }
        Cli::Solve { args } => {
            let cube = args.cube()?;
            println!("{}", cube);

            let db = match &args.db {
                Some(path) => PatternDatabase::load_from_path(path)?,
                None => PatternDatabase::build(),
            };
            let solution = Solver::new(&db)
                .heuristic(args.heuristic)
                .symmetry(!args.no_symmetry)
                .strategy(args.strategy)
                .solve(cube)?;
            println!("{}", solution);
        }
        Cli::Bench {
            count,
            length,
            heuristic,
        } => {
            let db = PatternDatabase::build_parallel();
            let cubes = (0..count)
                .map(|_| Cube::solved().apply_all(random_scramble(length)))
                .collect::<Vec<_>>();

            let start = std::time::Instant::now();
            let solutions = Solver::new(&db)
                .heuristic(heuristic)
                .solve_all(&cubes)
                .into_iter()
                .collect::<Result<Vec<_>, _>>()?;

            let moves: usize = solutions.iter().map(|s| s.route.len()).sum();
            let visited: usize = solutions.iter().map(|s| s.nodes_visited).sum();
            println!(
                "Solved {} cubes in {:?}: {:.1} moves and {:.0} visited per cube",
                count,
                start.elapsed(),
                moves as f64 / count.max(1) as f64,
                visited as f64 / count.max(1) as f64
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn solve_args(args: &[&str]) -> SolveArgs {
        match Cli::parse_from(["cornercube", "solve"].iter().chain(args)) {
            Cli::Solve { args } => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn symbols_and_notation_agree() {
        let from_symbols = solve_args(&["--symbols", "UrFF"]).cube().unwrap();
        let from_notation = solve_args(&["--scramble", "U R' F2"]).cube().unwrap();
        assert_eq!(from_symbols, from_notation);
        assert_eq!(from_symbols, cube_with_moves("U R' F F"));
    }

    #[test]
    fn stickers_input_reads_printed_stickers() {
        let cube = cube_with_moves("F U'");
        let text = format_stickers(&cube.stickers());
        assert_eq!(solve_args(&["--stickers", &text]).cube().unwrap(), cube);
    }

    #[test]
    fn exactly_one_input() {
        assert!(solve_args(&[]).cube().is_err());
        assert!(solve_args(&["--symbols", "U", "--scramble", "U"]).cube().is_err());
        assert!(solve_args(&["--symbols", "Ux"]).cube().is_err());
    }

    #[test]
    fn every_subcommand_has_help() {
        let command = Cli::command();
        for sub in command.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no help", sub.get_name());
        }
    }
}
