// Copyright (c) 2026 rezky_nightky

mod cell;
mod charset;
mod column;
mod config;
mod gradient;
mod rain;
mod rng;
mod screen;
mod terminal;
#[cfg(test)]
mod testutil;

use std::env;
use std::time::{Duration, Instant};

#[cfg(unix)]
use std::thread;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::charset::print_list_charsets;
use crate::config::{Args, Config};
use crate::gradient::{gradient, to_hex, HEAD_COLOR};
use crate::rain::Rain;
use crate::rng::{RandomSource, StdRandom};
use crate::terminal::{restore_terminal_best_effort, Terminal};

fn default_to_ascii() -> bool {
    let lang = env::var("LANG").unwrap_or_default();
    !lang.to_ascii_uppercase().contains("UTF")
}

fn print_gradient(cfg: &Config) {
    if cfg.bright_head {
        println!("head  {}", to_hex(HEAD_COLOR));
    }
    for at in 0..cfg.trail_len {
        println!(
            "{:<5} {}",
            at,
            to_hex(gradient(cfg.base_color, cfg.trail_len, at))
        );
    }
}

fn run(cfg: &Config, args: &Args) -> std::io::Result<()> {
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_os()),
    };

    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;
    let mut rain = Rain::new(cfg, width, height);

    let period = Duration::from_millis(cfg.delay_ms);
    let mut next_tick = Instant::now();
    let end_time = args.duration.and_then(|s| {
        if s.is_finite() && s > 0.0 {
            Some(Instant::now() + Duration::from_secs_f64(s))
        } else {
            None
        }
    });
    let mut running = true;

    while running {
        if end_time.is_some_and(|end| Instant::now() >= end) {
            break;
        }

        let mut pending_resize: Option<(u16, u16)> = None;

        // Drain input and sleep until the next tick is due. Stop requests
        // take effect here, before the tick fires, never mid-tick.
        loop {
            while Terminal::poll_event(Duration::from_millis(0))? {
                match Terminal::read_event()? {
                    Event::Resize(nw, nh) => pending_resize = Some((nw, nh)),
                    Event::Key(k) if k.kind == KeyEventKind::Press => {
                        if args.screensaver {
                            running = false;
                            break;
                        }
                        match (k.code, k.modifiers) {
                            (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => running = false,
                            (KeyCode::Char('c'), KeyModifiers::CONTROL) => running = false,
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }

            if !running || pending_resize.is_some() {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                break;
            }

            let mut timeout = next_tick - now;
            if let Some(end) = end_time {
                if now >= end {
                    break;
                }
                timeout = timeout.min(end - now);
            }
            let _ = Terminal::poll_event(timeout)?;
        }

        if !running {
            break;
        }

        if let Some((nw, nh)) = pending_resize {
            rain.resize(nw, nh);
        }

        rain.tick(rng.as_mut(), &mut term)?;

        next_tick += period;
        let now = Instant::now();
        if now > next_tick {
            next_tick = now;
        }
    }

    Ok(())
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let args = Args::parse();

    if args.list_charsets {
        print_list_charsets();
        return Ok(());
    }

    let cfg = match Config::from_args(&args, default_to_ascii()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if args.show_gradient {
        print_gradient(&cfg);
        return Ok(());
    }

    run(&cfg, &args)
}
