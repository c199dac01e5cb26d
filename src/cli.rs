// Idiomatic Rust CLI for Oxiz85.
//
// Subcommands wrap the whole-buffer codec: the input is read fully,
// converted in one call, then written out.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::io::{self as z85io, CodecOptions};
use crate::z85::{ALPHABET, MARK, PAD, Variant};

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Z85 (ZeroMQ base-85) encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "oxiz85",
    version,
    about = "Z85 encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode binary input as Z85 text.
    Encode(EncodeArgs),
    /// Decode Z85 text back to binary.
    Decode(DecodeArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Remainder policy: default, strict or padded.
    #[arg(long, default_value_t = Variant::Default)]
    variant: Variant,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Do not terminate the encoded text with a newline.
    #[arg(long = "no-newline")]
    no_newline: bool,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Validate the input only (do not write output).
    #[arg(long = "check-only")]
    no_output: bool,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    Config,
}

struct Options {
    command: Command,
    variant: Variant,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    newline: bool,
    no_output: bool,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

impl Options {
    fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            variant: self.variant,
            newline: self.newline,
        }
    }
}

fn resolve_options(cli: Cli) -> Options {
    let mut opts = Options {
        command: Command::Config,
        variant: Variant::Default,
        use_stdout: false,
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        newline: true,
        no_output: false,
        input_file: None,
        output_file: None,
        json_output: cli.json_output,
    };

    let io = match cli.command {
        Cmd::Encode(args) => {
            opts.command = Command::Encode;
            opts.newline = !args.no_newline;
            args.io
        }
        Cmd::Decode(args) => {
            opts.command = Command::Decode;
            opts.no_output = args.no_output;
            args.io
        }
        Cmd::Config => return opts,
    };

    opts.variant = io.variant;
    opts.use_stdout = io.stdout;
    opts.input_file = io.input.or(io.input_pos);
    opts.output_file = io.output.or(io.output_pos);
    opts
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("oxiz85".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config(opts: &Options) -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    let file_io = cfg!(feature = "file-io") as u8;

    if opts.json_output {
        let json = serde_json::json!({
            "command": "config",
            "version": version,
            "alphabet": ALPHABET,
            "mark": MARK.to_string(),
            "pad": PAD.to_string(),
            "file_io": file_io == 1,
        });
        eprintln!("{json:#}");
        return 0;
    }

    eprintln!("oxiz85 version {version} (Rust)");
    eprintln!("ALPHABET={ALPHABET}");
    eprintln!("MARK={MARK}");
    eprintln!("PAD={PAD}");
    eprintln!("FILE_IO={file_io}");
    eprintln!("VARIANTS=default,strict,padded");

    0
}

// ---------------------------------------------------------------------------
// Input / output plumbing
// ---------------------------------------------------------------------------

fn open_input(opts: &Options) -> Result<Box<dyn Read>, i32> {
    match &opts.input_file {
        Some(path) => match File::open(path) {
            Ok(f) => Ok(Box::new(BufReader::with_capacity(BUF_SIZE, f))),
            Err(e) => {
                eprintln!("oxiz85: input file: {}: {e}", path.display());
                Err(1)
            }
        },
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, i32> {
    if opts.no_output {
        return Ok(Box::new(io::sink()));
    }
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => create_output(path),
    }
}

fn check_overwrite(opts: &Options) -> Result<(), i32> {
    if opts.no_output || opts.use_stdout {
        return Ok(());
    }
    match &opts.output_file {
        Some(path) if path.exists() && !opts.force => {
            eprintln!(
                "oxiz85: output file exists, use -f to overwrite: {}",
                path.display()
            );
            Err(1)
        }
        _ => Ok(()),
    }
}

fn create_output(path: &Path) -> Result<Box<dyn Write>, i32> {
    match File::create(path) {
        Ok(f) => Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f))),
        Err(e) => {
            eprintln!("oxiz85: output file: {}: {e}", path.display());
            Err(1)
        }
    }
}

// The output is only opened once the codec has succeeded, so a rejected
// input never truncates or creates the destination file.
fn write_output(opts: &Options, data: &[u8]) -> Result<(), i32> {
    let mut writer = open_output(opts)?;
    if let Err(e) = writer.write_all(data).and_then(|()| writer.flush()) {
        eprintln!("oxiz85: write error: {e}");
        return Err(1);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let reader = match open_input(opts) {
        Ok(r) => r,
        Err(code) => return code,
    };
    if let Err(code) = check_overwrite(opts) {
        return code;
    }

    let mut buf = Vec::new();
    let stats = match z85io::encode_stream(reader, &mut buf, opts.codec_options()) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("oxiz85: encode error: {e}");
            return 1;
        }
    };
    if let Err(code) = write_output(opts, &buf) {
        return code;
    }
    log::info!("encoded {} bytes into {} blocks", stats.input_size, stats.blocks);

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "oxiz85: encoder: variant: {}, input size: {}, output size: {}, blocks: {}",
            opts.variant, stats.input_size, stats.output_size, stats.blocks
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "encode",
            "variant": opts.variant.name(),
            "input_size": stats.input_size,
            "output_size": stats.output_size,
            "blocks": stats.blocks,
            "input_sha256": stats.input_sha256.as_ref().map(|d| z85io::hex(d)),
        });
        eprintln!("{json:#}");
    }

    0
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(opts: &Options) -> i32 {
    let reader = match open_input(opts) {
        Ok(r) => r,
        Err(code) => return code,
    };
    if let Err(code) = check_overwrite(opts) {
        return code;
    }

    let mut buf = Vec::new();
    let stats = match z85io::decode_stream(reader, &mut buf, opts.codec_options()) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("oxiz85: decode error: {e}");
            return 1;
        }
    };
    if let Err(code) = write_output(opts, &buf) {
        return code;
    }
    log::info!("decoded {} characters into {} bytes", stats.input_size, stats.output_size);

    if opts.no_output && !opts.quiet {
        eprintln!("oxiz85: input is valid: output size: {}", stats.output_size);
    } else if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "oxiz85: decoder: variant: {}, input size: {}, output size: {}, blocks: {}",
            opts.variant, stats.input_size, stats.output_size, stats.blocks
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": "decode",
            "variant": opts.variant.name(),
            "input_size": stats.input_size,
            "output_size": stats.output_size,
            "blocks": stats.blocks,
            "output_sha256": stats.output_sha256.as_ref().map(|d| z85io::hex(d)),
        });
        eprintln!("{json:#}");
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(opts.verbose)),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    // Warn if -c overrides output filename.
    if opts.use_stdout
        && !opts.quiet
        && let Some(path) = opts.output_file.take()
    {
        log::warn!("-c option overrides output filename: {}", path.display());
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::Config => cmd_config(&opts),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
