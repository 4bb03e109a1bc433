use crate::error;
use crate::lang::Error;
use crate::mach::Device;
use mortal::{Event, Key, PrepareConfig, Terminal};
use std::io::{IsTerminal, Read, Write};

type Result<T> = std::result::Result<T, Error>;

/// Standard output, and single keystrokes from the terminal without echo.
/// When stdin is not a terminal, characters are read from it as UTF-8.
pub struct Console {
    terminal: Option<Terminal>,
}

impl Console {
    pub fn new() -> Console {
        let terminal = if std::io::stdin().is_terminal() {
            Terminal::new().ok()
        } else {
            None
        };
        Console { terminal }
    }
}

impl Default for Console {
    fn default() -> Console {
        Console::new()
    }
}

impl Device for Console {
    fn print(&mut self, ch: char) -> Result<()> {
        let mut buf = [0; 4];
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn input(&mut self) -> Result<Option<char>> {
        match &self.terminal {
            Some(terminal) => read_key(terminal),
            None => read_char(&mut std::io::stdin().lock()),
        }
    }
}

fn read_key(terminal: &Terminal) -> Result<Option<char>> {
    let state = terminal.prepare(PrepareConfig::default())?;
    let result = loop {
        match terminal.read_event(None) {
            Ok(Some(Event::Key(key))) => {
                if let Some(result) = key_char(key) {
                    break result;
                }
            }
            Ok(_) => {}
            Err(error) => break Err(error.into()),
        }
    };
    terminal.restore(state)?;
    result
}

/// Keys map to the characters a raw terminal would have sent.
fn key_char(key: Key) -> Option<Result<Option<char>>> {
    match key {
        Key::Char(ch) => Some(Ok(Some(ch))),
        Key::Enter => Some(Ok(Some('\r'))),
        Key::Tab => Some(Ok(Some('\t'))),
        Key::Backspace => Some(Ok(Some('\x7f'))),
        Key::Escape => Some(Ok(Some('\x1b'))),
        Key::Ctrl('c') => Some(Err(error!(Break))),
        Key::Ctrl(ch) if ch.is_ascii_alphabetic() => {
            Some(Ok(Some(char::from(ch.to_ascii_lowercase() as u8 & 0x1f))))
        }
        _ => None,
    }
}

fn read_char<R: Read>(reader: &mut R) -> Result<Option<char>> {
    let mut buf = [0u8; 4];
    if reader.read(&mut buf[..1])? == 0 {
        return Ok(None);
    }
    let width = match buf[0] {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    };
    reader.read_exact(&mut buf[1..width])?;
    Ok(std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .or(Some(char::REPLACEMENT_CHARACTER)))
}
