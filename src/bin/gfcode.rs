//! gfcode - Galois field erasure coding demo and test driver
//!
//! Encodes a random message, throws away all but K random codeword symbols,
//! decodes, and checks the result. Also runs the exhaustive table-vs-reference
//! field comparison.

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use gfcode::galois::{
    Gf16Field, Gf8Field, Poly16427, Poly19, Poly285, Poly4299161607, Poly69643, Prime257,
    Prime65537, PrimeField, PrimitivePolynomial, ReferenceField,
};
use gfcode::testbench::{self, format_elapsed};
use gfcode::{CauchyCoder, CoderConfig, FieldElement, FieldKind, GaloisField, LagrangeCoder, Scheme};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Bind `$field` to a freshly built field of the requested kind and evaluate `$body`
macro_rules! with_field {
    ($kind:expr, $field:ident => $body:expr) => {
        match $kind {
            FieldKind::Prime257 => {
                let $field = PrimeField::<Prime257>::new();
                $body
            }
            FieldKind::Prime65537 => {
                let $field = PrimeField::<Prime65537>::new();
                $body
            }
            FieldKind::Gf16 => {
                let $field = Gf8Field::generate(Poly19::POLY)?;
                $body
            }
            FieldKind::Gf256 => {
                let $field = Gf8Field::generate(Poly285::POLY)?;
                $body
            }
            FieldKind::Gf16384 => {
                let $field = Gf16Field::generate(Poly16427::POLY)?;
                $body
            }
            FieldKind::Gf65536 => {
                let $field = Gf16Field::generate(Poly69643::POLY)?;
                $body
            }
            FieldKind::Ref32 => {
                let $field = ReferenceField::<Poly4299161607>::new();
                $body
            }
        }
    };
}

fn field_arg() -> Arg {
    Arg::new("field")
        .short('f')
        .long("field")
        .help(format!("Field to use ({})", FieldKind::NAMES.join(", ")))
        .value_name("FIELD")
        .value_parser(value_parser!(FieldKind))
        .default_value("gf256")
}

fn coder_args(cmd: Command) -> Command {
    cmd.arg(field_arg())
        .arg(
            Arg::new("data")
                .short('k')
                .long("data")
                .help("Number of message symbols K (default: 7)")
                .value_name("K")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("total")
                .short('n')
                .long("total")
                .help("Number of codeword symbols N (default: 29)")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for the message and erasure pattern")
                .value_name("SEED")
                .value_parser(value_parser!(u64)),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("gfcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Galois field arithmetic and Reed-Solomon erasure coding")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .subcommand(coder_args(
            Command::new("cauchy").about("Cauchy matrix erasure coding round trip"),
        ))
        .subcommand(coder_args(
            Command::new("lagrange").about("Lagrange interpolation erasure coding round trip"),
        ))
        .subcommand(
            Command::new("testbench")
                .about("Compare a table-driven field against the reference field")
                .arg(field_arg())
                .arg(
                    Arg::new("row_step")
                        .long("row-step")
                        .help("Only compare every STEP-th left operand (default: 1)")
                        .value_name("STEP")
                        .value_parser(value_parser!(u64))
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show field order, polynomial and table memory")
                .arg(field_arg()),
        )
        .get_matches();

    let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);
    configure_threads(threads);

    match matches.subcommand() {
        Some(("cauchy", sub)) => run_coder(sub, Scheme::Cauchy),
        Some(("lagrange", sub)) => run_coder(sub, Scheme::Lagrange),
        Some(("testbench", sub)) => run_testbench(sub),
        Some(("info", sub)) => run_info(sub),
        _ => unreachable!("subcommand_required"),
    }
}

fn configure_threads(threads: usize) {
    if threads == 0 {
        return;
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap_or_else(|_| {
            eprintln!(
                "Warning: Could not set thread count to {}, using default",
                threads
            );
        });
}

fn field_kind(matches: &ArgMatches) -> FieldKind {
    matches
        .get_one::<FieldKind>("field")
        .copied()
        .unwrap_or(FieldKind::Gf256)
}

fn run_coder(matches: &ArgMatches, scheme: Scheme) -> Result<()> {
    let kind = field_kind(matches);
    let config = CoderConfig::from_args(matches);
    config
        .validate(kind, scheme)
        .with_context(|| format!("Invalid configuration for field {}", kind))?;

    debug!(
        "{} round trip over {} on {} threads",
        scheme,
        kind,
        config.effective_threads()
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!("Coder configuration: {:?}", config);

    with_field!(kind, field => match scheme {
        Scheme::Cauchy => cauchy_round_trip(&field, &config, &mut rng),
        Scheme::Lagrange => lagrange_round_trip(&field, &config, &mut rng),
    })
}

fn random_message<F: GaloisField>(field: &F, k: usize, rng: &mut StdRng) -> Result<Vec<F::Element>> {
    (0..k)
        .map(|_| {
            field
                .element(rng.random_range(0..field.order()))
                .context("Failed to draw a message symbol")
        })
        .collect()
}

fn render<E: FieldElement>(label: &str, values: impl IntoIterator<Item = E>) -> String {
    values
        .into_iter()
        .fold(String::from(label), |acc, v| format!("{} {}", acc, v))
}

fn cauchy_round_trip<F: GaloisField>(field: &F, config: &CoderConfig, rng: &mut StdRng) -> Result<()> {
    let (k, n) = (config.data_symbols, config.total_symbols);
    let coder = CauchyCoder::with_default_coords(field, k, n)?;

    let message = random_message(field, k, rng)?;
    println!("{}", render("mesg:", message.iter().copied()));

    let codeword = coder.codeword(&message)?;
    println!("{}", render("code:", codeword.iter().map(|node| node.value)));

    let received: Vec<_> = codeword.choose_multiple(rng, k).copied().collect();
    let positions: Vec<String> = received
        .iter()
        .map(|node| (node.coord.to_u64() - k as u64).to_string())
        .collect();
    println!("rpos: {}", positions.join(" "));

    let start = Instant::now();
    let decoded = coder.decode(&received)?;
    let elapsed = start.elapsed();
    println!("{}", render("recv:", decoded.iter().copied()));

    if decoded != message {
        bail!("Decoded message does not match the original");
    }
    println!("decoded {} of {} symbols in {}", k, n, format_elapsed(elapsed));
    Ok(())
}

fn lagrange_round_trip<F: GaloisField>(
    field: &F,
    config: &CoderConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let (k, n) = (config.data_symbols, config.total_symbols);
    let coder = LagrangeCoder::systematic(field, k)?;

    let message = random_message(field, k, rng)?;
    println!("{}", render("mesg:", message.iter().copied()));

    let codeword = coder.encode_fixed(&message, n)?;
    println!("{}", render("code:", codeword.iter().map(|node| node.value)));

    let received: Vec<_> = codeword.choose_multiple(rng, k).copied().collect();
    println!("{}", render("rpos:", received.iter().map(|node| node.coord)));

    let start = Instant::now();
    let decoded = coder.decode(&received)?;
    let elapsed = start.elapsed();
    println!("{}", render("recv:", decoded.iter().copied()));

    if decoded != message {
        bail!("Decoded message does not match the original");
    }
    println!("decoded {} of {} symbols in {}", k, n, format_elapsed(elapsed));
    Ok(())
}

fn run_testbench(matches: &ArgMatches) -> Result<()> {
    let kind = field_kind(matches);
    let row_step = matches.get_one::<u64>("row_step").copied().unwrap_or(1);

    println!("exhaustive test for {} (order {}):", kind, kind.order());
    let report = match kind {
        FieldKind::Gf16 => compare::<Poly19, _>(&Gf8Field::generate(Poly19::POLY)?, row_step)?,
        FieldKind::Gf256 => compare::<Poly285, _>(&Gf8Field::generate(Poly285::POLY)?, row_step)?,
        FieldKind::Gf16384 => {
            compare::<Poly16427, _>(&Gf16Field::generate(Poly16427::POLY)?, row_step)?
        }
        FieldKind::Gf65536 => {
            compare::<Poly69643, _>(&Gf16Field::generate(Poly69643::POLY)?, row_step)?
        }
        other => bail!("{} has no table-driven implementation to compare", other),
    };
    println!("{}", report);
    Ok(())
}

fn compare<P, F>(table: &F, row_step: u64) -> Result<testbench::EquivalenceReport>
where
    P: PrimitivePolynomial,
    F: GaloisField,
{
    let reference = ReferenceField::<P>::new();
    testbench::compare_fields_sampled(table, &reference, row_step)
        .context("Table field disagrees with the reference field")
}

fn run_info(matches: &ArgMatches) -> Result<()> {
    let kind = field_kind(matches);
    println!("field: {}", kind);
    println!("order: {}", kind.order());
    match kind.polynomial() {
        Some(poly) => println!("polynomial: {} ({:#x})", poly, poly),
        None => println!("modulus: {}", kind.order()),
    }

    let start = Instant::now();
    let memory = match kind {
        FieldKind::Gf16 | FieldKind::Gf256 => {
            Some(Gf8Field::generate(kind.polynomial().unwrap_or_default())?.memory_usage())
        }
        FieldKind::Gf16384 | FieldKind::Gf65536 => {
            Some(Gf16Field::generate(kind.polynomial().unwrap_or_default())?.memory_usage())
        }
        _ => None,
    };
    match memory {
        Some(bytes) => println!(
            "tables: {} bytes, generated in {}",
            bytes,
            format_elapsed(start.elapsed())
        ),
        None => println!("tables: none"),
    }
    Ok(())
}
