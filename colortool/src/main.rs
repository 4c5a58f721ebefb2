#[cfg_attr(not(feature = "display"), allow(dead_code))]
mod config;
#[cfg_attr(not(feature = "display"), allow(dead_code))]
mod dismiss;
#[cfg_attr(not(feature = "display"), allow(dead_code))]
mod font;
#[cfg_attr(not(feature = "display"), allow(dead_code))]
mod layout;
#[cfg(feature = "display")]
mod swatch;

use std::io::{self, Write};

use anyhow::Context;
use argh::FromArgs;
use libcolor::{parse_bits, parse_color, Color, NO_FILTER, NO_MASK};

const VERSION: &str = "1.0.1";

#[derive(FromArgs)]
/// Convert, mask, filter and display colors.
struct Arguments {
    #[argh(option, short = 'c')]
    /// the color to operate on, as R,G,B, #RRGGBB, 0xRRGGBB or a decimal
    /// integer; required except with --version or --help
    color: Option<String>,

    #[argh(switch, short = 'd')]
    /// show the color in a window; without this flag the tool never needs a
    /// display
    display: bool,

    #[argh(switch, short = 'x')]
    /// print the color as #RRGGBB (before R,G,B when -r is also given)
    output_hex: bool,

    #[argh(switch, short = 'r')]
    /// print the color as R,G,B
    output_rgb: bool,

    #[argh(switch, short = 'n')]
    /// keep the window from -d open on keystrokes other than Escape
    noclose: bool,

    #[argh(option, short = 'm')]
    /// hex value OR-ed with the color, applied before the filter
    mask: Option<String>,

    #[argh(option, short = 'f')]
    /// hex value AND-ed with the color, applied after the mask
    filter: Option<String>,

    #[argh(switch, short = 'v')]
    /// print the version and exit
    version: bool,
}

/// Parse the color and run it through the mask, then the filter.
fn resolve(args: &Arguments) -> Result<Color, anyhow::Error> {
    let spec = args
        .color
        .as_deref()
        .context("no color given, pass one with -c")?;
    let color = parse_color(spec)?;

    let mask = match &args.mask {
        Some(s) => parse_bits(s).context("bad mask")?,
        None => NO_MASK,
    };
    let filter = match &args.filter {
        Some(s) => parse_bits(s).context("bad filter")?,
        None => NO_FILTER,
    };
    log::debug!(
        "color {} mask {:#010x} filter {:#010x}",
        color.hex(),
        mask,
        filter
    );

    Ok(color.mask(mask).filter(filter))
}

fn print_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", VERSION)
}

fn report<W: Write>(out: &mut W, color: Color, hex: bool, rgb: bool) -> io::Result<()> {
    if hex {
        writeln!(out, "{}", color.hex())?;
    }
    if rgb {
        writeln!(out, "{}", color.triplet())?;
    }
    Ok(())
}

#[cfg(feature = "display")]
fn display(color: Color, noclose: bool) -> Result<(), anyhow::Error> {
    let config = config::Config::load_or_default();
    swatch::show(color, &config, noclose).context("could not open display")
}

#[cfg(not(feature = "display"))]
fn display(_color: Color, _noclose: bool) -> Result<(), anyhow::Error> {
    anyhow::bail!("could not open display: built without the `display` feature")
}

fn run(args: Arguments) -> Result<(), anyhow::Error> {
    if args.version {
        print_version(&mut io::stdout().lock())?;
        return Ok(());
    }

    let color = resolve(&args)?;
    report(&mut io::stdout().lock(), color, args.output_hex, args.output_rgb)?;

    if args.display {
        display(color, args.noclose)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(argh::from_env()) {
        eprintln!("FATAL: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Arguments {
        Arguments::from_args(&["colortool"], list).unwrap()
    }

    fn printed(color: Color, hex: bool, rgb: bool) -> String {
        let mut out = Vec::new();
        report(&mut out, color, hex, rgb).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_resolve_defaults_are_no_ops() {
        let color = resolve(&args(&["-c", "12,34,56"])).unwrap();
        assert_eq!(color, Color::from_rgb(12, 34, 56));
    }

    #[test]
    fn test_resolve_mask_before_filter() {
        let color = resolve(&args(&[
            "--color", "#102030", "--mask", "0x0000FF", "--filter", "0x00000F",
        ]))
        .unwrap();
        assert_eq!(color.value(), 0x00000F);

        let color = resolve(&args(&["-c", "0x000000", "-m", "ff0000"])).unwrap();
        assert_eq!(color.triplet().to_string(), "255,0,0");
    }

    #[test]
    fn test_resolve_errors() {
        assert!(resolve(&args(&["-x"])).is_err());
        assert!(resolve(&args(&["-c", "1,2"])).is_err());

        let err = resolve(&args(&["-c", "#fff", "-m", "nope"])).unwrap_err();
        assert_eq!(format!("{:#}", err), "bad mask: invalid long int 'nope' with base 16");
    }

    #[test]
    fn test_report_hex_before_rgb() {
        let color = Color::from_rgb(1, 2, 255);
        assert_eq!(printed(color, true, true), "#0102ff\n1,2,255\n");
        assert_eq!(printed(color, false, true), "1,2,255\n");
        assert_eq!(printed(color, false, false), "");
    }

    #[test]
    fn test_version() {
        let mut out = Vec::new();
        print_version(&mut out).unwrap();
        assert_eq!(out, b"1.0.1\n");
    }

    #[test]
    fn test_flags() {
        let a = args(&["-c", "1", "-d", "-x", "-r", "-n"]);
        assert!(a.display && a.output_hex && a.output_rgb && a.noclose);
        assert!(args(&["-v"]).version);
        assert!(Arguments::from_args(&["colortool"], &["--bogus"]).is_err());
    }
}
