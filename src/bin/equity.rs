//! Equity Binary
//!
//! Answers showdown equity questions from the command line, either once
//! or interactively until `quit`.

use clap::Parser;
use rbp_equity::*;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Showdown equity for heads-up hold'em", long_about = None)]
struct Args {
    /// Hero's hole cards, e.g. AsKd
    hero: Option<String>,
    /// Villain's hole cards, or one of tight, balanced, loose, random
    opponent: Option<String>,
    /// Board cards, e.g. 2c7d9h (omit for preflop)
    #[arg(default_value = "")]
    board: String,
    /// auto, exact or simulate
    #[arg(short, long, default_value = "auto")]
    mode: equity::Mode,
    /// Monte Carlo trials, overriding the configured default
    #[arg(short, long)]
    iterations: Option<Iterations>,
    /// Question id the seed is derived from
    #[arg(long)]
    id: Option<String>,
    /// Explicit sampler seed
    #[arg(long)]
    seed: Option<Seed>,
    /// JSON config file; environment variables are used otherwise
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Read queries from stdin, one per line: HERO OPPONENT [BOARD]
    #[arg(long)]
    interactive: bool,
}

impl Args {
    fn query(&self, hero: &str, opponent: &str, board: &str) -> anyhow::Result<equity::Query> {
        let mut query = equity::Query::parse(hero, opponent, board)?.with_mode(self.mode);
        if let Some(n) = self.iterations {
            query = query.with_iterations(n);
        }
        if let Some(ref id) = self.id {
            query = query.with_identifier(id.clone());
        }
        if let Some(seed) = self.seed {
            query = query.with_seed(seed);
        }
        Ok(query)
    }
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::from_json(path)?,
        None => Config::from_env()?,
    };
    let engine = Engine::new(config);
    match (args.interactive, &args.hero, &args.opponent) {
        (true, _, _) => repl(&engine, &args),
        (false, Some(hero), Some(opponent)) => {
            let query = args.query(hero, opponent, &args.board)?;
            println!("{}", serde_json::to_string(&engine.equity(&query)?)?);
            Ok(())
        }
        _ => anyhow::bail!("expected HERO and OPPONENT, or --interactive"),
    }
}

fn repl(engine: &Engine, args: &Args) -> anyhow::Result<()> {
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let ref mut input = String::new();
        if std::io::stdin().read_line(input)? == 0 {
            break;
        }
        let words = input.split_whitespace().collect::<Vec<&str>>();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["stats"] => println!("{}", serde_json::to_string(&engine.stats())?),
            ["reset"] => engine.reset(),
            [hero, opponent, rest @ ..] => match args
                .query(hero, opponent, &rest.concat())
                .and_then(|q| Ok(engine.equity(&q)?))
            {
                Ok(result) => println!("{}", result),
                Err(e) => eprintln!("error: {}", e),
            },
            _ => eprintln!("usage: HERO OPPONENT [BOARD] | stats | reset | quit"),
        }
    }
    Ok(())
}
