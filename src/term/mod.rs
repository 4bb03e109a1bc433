extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{prepare, Column, Error, TERMINATOR};
use crate::mach::{Config, Runtime, MAX_CELLS};
use ansi_term::Style;
use clap::{ArgAction, Parser};
use linefeed::{Interface, ReadResult};
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::sync::atomic::Ordering;

mod console;
pub use console::Console;

#[derive(Debug, Parser)]
#[command(name = "integ", version, about = "The Integ programming language")]
struct Args {
    /// Program to run. Without it, stdin is the program unless it is a
    /// terminal, in which case the interactive prompt starts.
    file: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Most cells the address space may hold
    #[arg(long, default_value_t = MAX_CELLS)]
    max_cells: usize,
}

pub fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    let config = Config {
        max_cells: args.max_cells,
    };
    let mut runtime = Runtime::with_config(Console::new(), config);
    let interrupted = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let status = match args.file {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(source) => batch(&mut runtime, &source),
            Err(error) => {
                eprintln!("{}: {}", path.display(), error);
                1
            }
        },
        None if std::io::stdin().is_terminal() => match interactive(&mut runtime) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                1
            }
        },
        None => {
            let mut source = String::new();
            match std::io::stdin().read_to_string(&mut source) {
                Ok(_) => batch(&mut runtime, &source),
                Err(error) => {
                    eprintln!("{}", error);
                    1
                }
            }
        }
    };
    std::process::exit(status);
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(error) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("{}", error);
    }
}

fn batch(runtime: &mut Runtime<Console>, source: &str) -> i32 {
    let program = prepare(source);
    info!("running {} byte program", program.len());
    match runtime.run(&program) {
        Ok(value) => {
            info!("program finished with {}", value);
            0
        }
        Err(error) => {
            eprintln!("\n{}", report(&program, &error));
            1
        }
    }
}

fn interactive(runtime: &mut Runtime<Console>) -> std::io::Result<()> {
    let interface = Interface::new("Integ")?;
    interface.set_prompt(">>> ")?;
    interface.write_fmt(format_args!(
        "\n--------Integ 1.1---------\n Interactive  Interpreter\n\n"
    ))?;
    info!("interactive session started");
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim() == TERMINATOR.to_string() {
            break;
        }
        if string.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(string.clone());
        let program = prepare(&string);
        match runtime.run(&program) {
            Ok(value) => debug!("{}", value),
            Err(error) => interface.write_fmt(format_args!("\n{}", report(&program, &error)))?,
        }
        interface.write_fmt(format_args!("\n"))?;
    }
    info!("interactive session ended");
    Ok(())
}

fn report(program: &str, error: &Error) -> String {
    let message = Style::new().bold().paint(error.to_string());
    let column = error.column();
    if column == (0..0) {
        format!("{}", message)
    } else {
        format!("{}\n{}", message, decorate(program, &column))
    }
}

/// Underlines `column` within the program. An empty column points just
/// past its start.
fn decorate(program: &str, column: &Column) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    for (index, ch) in program.char_indices() {
        let do_under = column.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
    }
    if column.is_empty() && column.start >= program.len() {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_underlines_column() {
        let style = Style::new().underline();
        let expected = format!("}}{}(0){}(1)", style.prefix(), style.suffix());
        assert_eq!(decorate("}(0)(1)", &(1..4)), expected);
    }

    #[test]
    fn test_decorate_past_end() {
        let style = Style::new().underline();
        let expected = format!("]{} {}", style.prefix(), style.suffix());
        assert_eq!(decorate("]", &(1..1)), expected);
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["integ", "-vv", "hello.integ"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.file, Some(PathBuf::from("hello.integ")));
        assert_eq!(args.max_cells, MAX_CELLS);
    }
}
