// Copyright (c) 2026 rezky_nightky

use std::str::FromStr;

use clap::Parser;

use crate::charset::{build_chars, charset_from_str};
use crate::gradient::Rgb;

#[derive(Clone, Copy, Debug)]
pub struct RgbSpec(pub Rgb);

impl FromStr for RgbSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("expected 6 hex digits, e.g. 41ff00".to_string());
        }
        let parse = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self([parse(0)?, parse(2)?, parse(4)?]))
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "glyphrain", version)]
pub struct Args {
    #[arg(
        long = "charset",
        default_value = "matrix",
        help_heading = "APPEARANCE",
        help = "Charset preset (see --list-charsets)"
    )]
    pub charset: String,

    #[arg(
        long = "chars",
        help_heading = "APPEARANCE",
        help = "Use exactly these characters instead of a preset"
    )]
    pub chars: Option<String>,

    #[arg(
        short = 'c',
        long = "color",
        default_value = "41ff00",
        help_heading = "APPEARANCE",
        help = "Base trail color as hex RGB"
    )]
    pub color: RgbSpec,

    #[arg(
        long = "no-head",
        help_heading = "APPEARANCE",
        help = "Disable the bright white lead glyph"
    )]
    pub no_head: bool,

    #[arg(
        short = 't',
        long = "trail",
        default_value_t = 12,
        help_heading = "APPEARANCE",
        help = "Trail length in cells (min 1)"
    )]
    pub trail: u16,

    #[arg(
        short = 'd',
        long = "delay",
        default_value_t = 5,
        help_heading = "TIMING",
        help = "Tick delay in milliseconds (min 1)"
    )]
    pub delay: u64,

    #[arg(
        long = "spawn-tries",
        default_value_t = 2,
        help_heading = "TIMING",
        help = "Spawn attempts per tick (0 disables spawning)"
    )]
    pub spawn_tries: u16,

    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds"
    )]
    pub duration: Option<f64>,

    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Screensaver mode (exit on any keypress)"
    )]
    pub screensaver: bool,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the random generator for reproducible runs"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "list-charsets",
        help_heading = "HELP",
        help = "List available charset presets and exit"
    )]
    pub list_charsets: bool,

    #[arg(
        long = "show-gradient",
        help_heading = "HELP",
        help = "Print the trail gradient as hex colors and exit"
    )]
    pub show_gradient: bool,
}

/// Validated animation settings. Built from `Args` before the terminal is
/// touched; a `Rain` constructed from a `Config` needs no further checks.
#[derive(Clone, Debug)]
pub struct Config {
    pub chars: Vec<char>,
    pub base_color: Rgb,
    pub bright_head: bool,
    pub spawn_tries: u16,
    pub trail_len: u16,
    pub delay_ms: u64,
}

impl Config {
    pub fn from_args(args: &Args, default_to_ascii: bool) -> Result<Self, String> {
        let chars = match &args.chars {
            Some(literal) => literal.chars().collect(),
            None => build_chars(charset_from_str(&args.charset, default_to_ascii)?),
        };

        let cfg = Self {
            chars,
            base_color: args.color.0,
            bright_head: !args.no_head,
            spawn_tries: args.spawn_tries,
            trail_len: args.trail,
            delay_ms: args.delay,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.chars.is_empty() {
            return Err("character set is empty".to_string());
        }
        if self.trail_len == 0 {
            return Err("trail length must be at least 1".to_string());
        }
        if self.delay_ms == 0 {
            return Err("delay must be at least 1 ms".to_string());
        }
        Ok(())
    }
}
