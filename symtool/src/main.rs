mod dump;
mod error;
mod trace;

use nocash_sym::{Msg, SymConfig, SymbolData};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input trace files
    #[clap(default_value = "main.trace")]
    input: Vec<String>,

    /// Output symbol file [default: main.sym]
    #[clap(short, long)]
    output: Option<String>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Symbol file version (2 adds function sizes)
    #[clap(short = 's', long)]
    sym_version: Option<u32>,

    /// Dump recorded symbols with their source lines
    #[clap(short, long)]
    dump: bool,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    use clap::Parser;
    use std::io::BufRead;

    let args: Args = Args::parse();
    init_logger(&args.log_level);
    println!("nocash sym recorder");

    let mut cfg = match &args.config {
        Some(path) => match SymConfig::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                Msg::Error(err.to_string()).print();
                std::process::exit(1);
            }
        },
        None => SymConfig::default(),
    };
    if let Some(output) = &args.output {
        cfg.output = Some(PathBuf::from(output));
    }
    if cfg.output.is_none() {
        cfg.output = Some(PathBuf::from("main.sym"));
    }
    if let Some(version) = args.sym_version {
        cfg.version = version;
    }

    let mut syms = SymbolData::new();
    syms.clear();
    syms.configure(&cfg);

    println!("1. Replay Traces");
    let mut replay = trace::Replay::new();
    for path in &args.input {
        println!("  < {}", path);
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                error::Error::FileOpen(path.clone(), e).print_diag(path, 0, "");
                continue;
            }
        };
        replay.begin(path);
        for (idx, raw) in std::io::BufReader::new(file).lines().enumerate() {
            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    error::Error::FileRead(e).print_diag(path, idx, "");
                    break;
                }
            };
            match trace::Command::parse(&raw) {
                Ok(Some(cmd)) => replay.step(&mut syms, idx, cmd),
                Ok(None) => {}
                Err(err) => err.print_diag(path, idx, &raw),
            }
        }
    }

    println!("2. Write Symbol File");
    if let Some(output) = syms.output() {
        println!("  > {}", output.display());
    }
    if syms.write().is_err() {
        std::process::exit(1);
    }

    if args.dump {
        dump::print_dump(&syms, replay.ids());
    }
}

fn init_logger(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new().filter_level(filter).init();
}
