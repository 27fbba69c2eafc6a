// ISO-8859-1 검사 데모 진입점
use clap::Parser;
use latin1_check::report::{SAMPLES, check_and_format};
use latin1_check::{find_unencodable, logger};

#[derive(Parser)]
#[command(name = "check_iso88591")]
#[command(about = "Check whether text can be encoded as ISO-8859-1 (Latin-1)")]
struct Args {
    /// Strings to check (defaults to the built-in samples)
    texts: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let texts: Vec<&str> = if args.texts.is_empty() {
        tracing::debug!("no input given, checking built-in samples");
        SAMPLES.to_vec()
    } else {
        args.texts.iter().map(String::as_str).collect()
    };

    for text in texts {
        if let Some(bad) = find_unencodable(text) {
            tracing::debug!(
                "'{}' (U+{:04X}) at char {} / byte {} is outside ISO-8859-1",
                bad.character,
                bad.character as u32,
                bad.char_index,
                bad.byte_offset
            );
        }
        println!("{}", check_and_format(text));
    }

    Ok(())
}
