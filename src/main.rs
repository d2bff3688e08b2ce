use clap::Parser;
use qpsk_encoder::output::{CsvWriter, DiscardSink, SampleSink};
use qpsk_encoder::qpsk::{EncoderConfig, encode_stream};
use qpsk_encoder::ui::{print_banner, progress::EncodeProgress};
use qpsk_encoder::utils::{consts::CONFIG_FILE, logging::init_logging};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Encode a byte stream into RRC-shaped QPSK baseband samples (CSV).
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON); defaults apply if it does not exist
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Input file, `-` for stdin
    #[arg(short, long)]
    input: Option<String>,
    /// Output CSV file, `-` for stdout
    #[arg(short, long)]
    output: Option<String>,
    /// Discard samples and report the encoding rate
    #[arg(long)]
    benchmark: bool,
    /// Show a progress spinner on stderr
    #[arg(long)]
    progress: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Encoding failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> qpsk_encoder::Result<()> {
    let mut config = EncoderConfig::load(&cli.config)?;
    if cli.benchmark {
        config.benchmark = true;
    }
    print_banner(&config);
    tracing::info!("{:?}", config);

    let src: Box<dyn io::Read> = match cli.input {
        Some(path) if path == "-" => Box::new(io::stdin().lock()),
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };

    let sink: Box<dyn SampleSink> = if config.benchmark {
        Box::new(DiscardSink::default())
    } else {
        let dst: Box<dyn io::Write> = match cli.output {
            Some(path) if path == "-" => Box::new(BufWriter::new(io::stdout().lock())),
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Box::new(CsvWriter::from_config(dst, &config))
    };

    let progress = cli.progress.then(EncodeProgress::new);

    let stats = encode_stream(&config, src, sink, |stats| {
        if let Some(pb) = &progress {
            pb.update(stats);
        }
    })?;

    if let Some(pb) = &progress {
        pb.finish(&stats);
    }

    if config.benchmark {
        println!("{:.0} bits/sec", stats.bits_per_second());
    }

    Ok(())
}
