use clap::Parser;
use ipv4cidr::Ipv4Cidr;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{self, BufRead};
use std::process;

/// Inspect IPv4 CIDR blocks given as arguments, or one per line on stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Blocks in a.b.c.d or a.b.c.d/e form.
    blocks: Vec<String>,

    /// Move the address to the first one of its range instead of rejecting it.
    #[arg(short, long)]
    standardize: bool,

    /// Also print the two halves of every block.
    #[arg(long)]
    split: bool,

    /// Also print the n-th address (1-based) of every block.
    #[arg(short, long, value_name = "N")]
    nth: Option<u64>,

    /// Append the prefix length to the n-th address.
    #[arg(short = 'p', long)]
    with_prefix: bool,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn describe(cidr: &Ipv4Cidr) -> String {
    format!("{}\t{}\t{}", cidr, cidr.netmask(), cidr.range_size())
}

fn report(line: &str, opts: &Opts) -> Result<(), ipv4cidr::CidrError> {
    let cidr = Ipv4Cidr::parse(line, opts.standardize)?;
    log::debug!("{} parsed as {:?}", line, cidr);
    println!("{}", describe(&cidr));
    if opts.split {
        let (lower, upper) = cidr.split()?;
        println!("  {}", describe(&lower));
        println!("  {}", describe(&upper));
    }
    if let Some(n) = opts.nth {
        println!("  #{}\t{}", n, cidr.nth_address(n, opts.with_prefix)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    init_logging(opts.verbose)?;

    let lines: Vec<String> = if opts.blocks.is_empty() {
        log::info!("Reading blocks from stdin");
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        opts.blocks.clone()
    };

    let mut failed = 0usize;
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if let Err(e) = report(line, &opts) {
            log::warn!("{}: {}", line, e);
            failed += 1;
        }
    }
    log::info!("{} blocks, {} failed", lines.len(), failed);
    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}
