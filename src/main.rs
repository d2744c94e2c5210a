use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use book_scan::generate::{random_problem, GeneratorParams};
use book_scan::io::read_problem;
use book_scan::{simulate, Problem, Strategy};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "book-scan")]
#[command(about = "Plans library signups for book scanning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, global = true, env = "BOOK_SCAN_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a problem and print the submission (default)
    Solve(SolveArgs),
    /// Print a random problem in input format
    Generate(GenerateArgs),
}

#[derive(Args, Default)]
struct SolveArgs {
    /// Problem file, stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
    strategy: Strategy,

    /// Print a readable plan followed by its simulated score
    #[arg(long)]
    diagnostic: bool,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 100)]
    books: u32,
    #[arg(long, default_value_t = 10)]
    libraries: u32,
    #[arg(long, default_value_t = 30)]
    days: u32,
    #[arg(long, default_value_t = 100)]
    max_score: u32,
    #[arg(long, default_value_t = 10)]
    max_signup: u32,
    #[arg(long, default_value_t = 5)]
    max_ship_per_day: u32,
    #[arg(long, default_value_t = 20)]
    max_books_per_library: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_level)?;

    match cli.command {
        Some(Commands::Solve(args)) => solve(args),
        None => solve(SolveArgs::default()),
        Some(Commands::Generate(args)) => generate(args),
    }
}

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_problem(input: Option<&PathBuf>) -> Result<Problem> {
    match input {
        Some(path) => {
            info!("Loading problem from: {:?}", path);
            let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
            read_problem(BufReader::new(file)).context("Failed to parse problem")
        }
        None => read_problem(io::stdin().lock()).context("Failed to parse problem from stdin"),
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let problem = load_problem(args.input.as_ref())?;
    info!(
        books = problem.catalog.len(),
        libraries = problem.libraries.len(),
        days = problem.days,
        strategy = ?args.strategy,
        "Problem loaded"
    );

    let solution = args
        .strategy
        .plan(&problem.libraries, problem.days)
        .context("Failed to plan library signups")?;

    let mut out = io::stdout().lock();
    if args.diagnostic {
        write!(out, "{}", solution.human_readable())?;
        writeln!(out, "{}", simulate(&solution, problem.days))?;
    } else {
        write!(out, "{}", solution)?;
    }
    out.flush()?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let params = GeneratorParams {
        books: args.books,
        libraries: args.libraries,
        days: args.days,
        max_score: args.max_score,
        max_signup: args.max_signup,
        max_ship_per_day: args.max_ship_per_day,
        max_books_per_library: args.max_books_per_library,
    };
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let problem = random_problem(&params, &mut rng).context("Failed to generate problem")?;
    print!("{}", problem);
    Ok(())
}
