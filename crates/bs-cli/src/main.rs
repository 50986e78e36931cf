//! `bsprice` — price a European vanilla option three ways.
//!
//! Collects the five contract parameters (from flags, or interactive prompts
//! for whichever are omitted) and prints, for both the call and the put, the
//! price from the closed-form formula, the Monte Carlo sampler, and the
//! finite-difference solver.

use std::io::{self, BufRead, Write};
use std::process;

use bspricer::core::{Error, Real, Result};
use bspricer::engines::{black_scholes_price, fdm_price, mc_price};
use bspricer::instruments::EuropeanOption;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bsprice",
    version,
    about = "European vanilla option pricer (closed form, Monte Carlo, finite differences)"
)]
struct Cli {
    /// Spot price of the underlying; prompted for when omitted
    #[arg(long)]
    spot: Option<Real>,

    /// Strike price; prompted for when omitted
    #[arg(long)]
    strike: Option<Real>,

    /// Continuously-compounded risk-free rate; prompted for when omitted
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<Real>,

    /// Volatility; prompted for when omitted
    #[arg(long)]
    volatility: Option<Real>,

    /// Time to maturity in years; prompted for when omitted
    #[arg(long)]
    maturity: Option<Real>,

    /// Monte Carlo sample count
    #[arg(long, default_value_t = 1_000_000)]
    samples: usize,

    /// Monte Carlo seed
    #[arg(long, default_value_t = 50)]
    seed: u64,

    /// Spatial grid intervals for the finite-difference solver
    #[arg(long, default_value_t = 400)]
    nodes: usize,

    /// Minimum time-step count for the finite-difference solver
    #[arg(long, default_value_t = 800)]
    steps: usize,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let spot = resolve(cli.spot, "spot price", &mut lines)?;
    let strike = resolve(cli.strike, "strike price", &mut lines)?;
    let rate = resolve(cli.rate, "risk-free interest rate", &mut lines)?;
    let volatility = resolve(cli.volatility, "volatility", &mut lines)?;
    let maturity = resolve(cli.maturity, "time to maturity (years)", &mut lines)?;

    let call = EuropeanOption::call(spot, strike, rate, volatility, maturity)?;
    let put = EuropeanOption::put(spot, strike, rate, volatility, maturity)?;

    for opt in [&call, &put] {
        println!("{} option", opt.option_type());
        println!("  closed form:       {:.6}", black_scholes_price(opt));
        println!(
            "  Monte Carlo:       {:.6}",
            mc_price(opt, cli.samples, cli.seed)
        );
        println!(
            "  finite difference: {:.6}",
            fdm_price(opt, cli.nodes, cli.steps)
        );
    }
    Ok(())
}

/// Use the flag value when given, otherwise prompt on stdout and read one
/// line from stdin.
fn resolve<I>(flag: Option<Real>, label: &str, lines: &mut I) -> Result<Real>
where
    I: Iterator<Item = io::Result<String>>,
{
    if let Some(v) = flag {
        return Ok(v);
    }
    print!("{label}: ");
    io::stdout()
        .flush()
        .map_err(|e| Error::Runtime(e.to_string()))?;
    let line = lines
        .next()
        .ok_or_else(|| Error::Runtime(format!("no input for {label}")))?
        .map_err(|e| Error::Runtime(e.to_string()))?;
    line.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("expected a number for {label}, got {:?}", line.trim())))
}
