mod apps;
mod terminal;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use monotron::input::Joystick;
use monotron::itoa::{ITOA_LEN, itoa};
use monotron::rand::Rand;
use monotron::sixel::{self, Sixel, SixelStyle};
use monotron::{Callbacks, FRAMES_PER_SECOND, boot, font::FontMode};
use tracing::{Level, info};
use tracing_subscriber::util::SubscriberInitExt;

use crate::apps::App;
use crate::terminal::{Terminal, render, spawn_stdin};

#[derive(Parser)]
#[command(name = "mtsim")]
#[command(version, about = "Monotron host simulator", long_about = None)]
struct Cli {
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in application against this terminal
    Run {
        app: App,

        /// Joystick state reported to the application
        #[arg(short, long, default_value = "0", value_parser = parse_byte)]
        joystick: u8,

        /// Vertical blank rate
        #[arg(long, default_value_t = FRAMES_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
    },

    /// Show the teletext glyph for a sixel pattern
    Sixel {
        /// 6-bit dot pattern; higher bits are ignored
        #[arg(value_parser = parse_byte)]
        pattern: u8,

        /// Use separated instead of connected dots
        #[arg(long)]
        separated: bool,
    },

    /// Decode a joystick state byte
    Joystick {
        #[arg(value_parser = parse_byte)]
        state: u8,
    },

    /// Print draws from the pseudo-random generator
    Rand {
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },

    /// Format an integer the way the SDK does
    Itoa {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
}

/// Accepts `42`, `0x2a` or `0b101010`.
fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u8::from_str_radix(&bin.replace('_', ""), 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("`{s}` is not a byte: {e}"))
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .finish()
        .init();
}

fn run(app: App, joystick: u8, fps: u32) -> Result<i32> {
    let stdout = io::stdout().lock();
    let mut terminal = Terminal::new(stdout, spawn_stdin())
        .with_joystick(joystick)
        .with_frame(Duration::from_secs(1) / fps);

    info!(?app, joystick, "starting application");
    let code = {
        let table = Callbacks::from_host(&mut terminal);
        unsafe { boot::start(&table, app.main()) }
    };
    terminal.into_inner().flush().context("flushing stdout")?;
    info!(code, "application returned");
    Ok(code)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run { app, joystick, fps } => {
            let code = run(app, joystick, fps)?;
            std::process::exit(code);
        }
        Commands::Sixel { pattern, separated } => {
            let style = if separated { SixelStyle::Separated } else { SixelStyle::Connected };
            let dots = Sixel::new(pattern);
            let glyph = dots.glyph(style);
            println!(
                "pattern {:#08b} ({style:?}) -> glyph {glyph:#04x} {}",
                dots.bits(),
                render(FontMode::Teletext, glyph)
            );
            debug_assert_eq!(sixel::decode(glyph), Some((dots, style)));
        }
        Commands::Joystick { state } => {
            let stick = Joystick::from(state);
            println!("state {state:#010b}: {stick:?}");
            if state & !Joystick::all().bits() != 0 {
                println!("reserved bits {:#010b} ignored", state & !Joystick::all().bits());
            }
        }
        Commands::Rand { seed, count } => {
            let mut rng = Rand::with_seed(seed);
            let mut out = io::stdout().lock();
            for _ in 0..count {
                writeln!(out, "{}", rng.rand()).context("writing to stdout")?;
            }
        }
        Commands::Itoa { n } => {
            let mut buf = [0; ITOA_LEN];
            println!("{}", itoa(n, &mut buf));
        }
    }
    Ok(())
}
