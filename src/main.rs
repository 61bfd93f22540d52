use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{Level, error, info};
use zenbmpart::{BmpArtError, BmpReader, Glyphs, Unstoppable};

#[rustfmt::skip]
fn create_cmd_args() -> Command {
    Command::new("zenbmpart")
        .about("Print a 24/32-bit BMP as text art")
        .arg(Arg::new("file")
            .value_name("bmp_file_path")
            .help("BMP file to display")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("light")
            .long("light")
            .value_parser(parse_glyph)
            .default_value(" ")
            .help("Glyph for pixels whose channels are all above 127"))
        .arg(Arg::new("dark")
            .long("dark")
            .value_parser(parse_glyph)
            .default_value("#")
            .help("Glyph for every other pixel"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
}

fn parse_glyph(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got {s:?}")),
    }
}

fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("could not initialize logger: {e}");
    }
    info!("Log level: {log_level}");
}

fn run(options: &ArgMatches) -> Result<(), BmpArtError> {
    let defaults = Glyphs::default();
    let glyphs = Glyphs {
        light: options.get_one::<char>("light").copied().unwrap_or(defaults.light),
        dark: options.get_one::<char>("dark").copied().unwrap_or(defaults.dark),
    };
    let mut reader = BmpReader::new().with_glyphs(glyphs);

    // `required(true)` guarantees presence; clap exits with usage otherwise.
    if let Some(path) = options.get_one::<PathBuf>("file") {
        reader.open(path, Unstoppable)?;
    }

    if let Some(headers) = reader.headers() {
        eprintln!("Bit: {}", headers.bits_per_pixel());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reader.render(&mut out, Unstoppable)?;
    out.flush()?;
    reader.close();
    Ok(())
}

fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    if let Err(e) = run(&options) {
        error!("Error: {e}");
        exit(-1);
    }
}
