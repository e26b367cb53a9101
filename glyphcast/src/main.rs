use std::{io::Write, path::PathBuf};

use clap::Parser;
use glyphcast::{encode, Error, Font};

#[derive(Parser, Debug)]
#[command(about = "Render a line of text to a grayscale PNG and an ASCII preview")]
struct Args {
    /// Path to the font file
    #[arg(short, long, default_value = "./fonts/IranNastaliq.ttf")]
    font: PathBuf,
    /// Face index for font collections
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Text to render
    #[arg(short, long, default_value = "نیوشا گوگولی")]
    text: String,
    /// Size in pixels per em
    #[arg(short, long, default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..))]
    ppem: u32,
    /// Where to write the PNG image
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
    /// Skip printing the ASCII preview
    #[arg(long)]
    no_preview: bool,
    /// Print the shaped glyphs to stderr as JSON
    #[arg(long)]
    print_glyphs: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse_from(wild::args());
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let font = Font::load(&args.font, args.index)?;
    let instance = font.instance(args.ppem)?;
    let glyphs = instance.shape(&args.text)?;
    if args.print_glyphs {
        let mut stderr = std::io::stderr().lock();
        serde_json::to_writer_pretty(&mut stderr, &glyphs).map_err(std::io::Error::from)?;
        writeln!(stderr)?;
    }
    let rendering = glyphcast::render_run(&glyphs, &instance)?;
    encode::save_png(&rendering.canvas, &args.output)?;
    if !args.no_preview {
        let mut stdout = std::io::stdout().lock();
        encode::write_ascii(&rendering.canvas, &mut stdout)?;
        stdout.flush()?;
    }
    Ok(())
}
