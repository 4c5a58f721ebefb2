use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{cluster, command::Command};

pub const HELP: &str = "\
available commands:

help . . . . display this message

write/w  . . read HEX characters in space-delimited clusters
             (length must be a multiple of 2), write the
             corresponding bytes to standard error. Example:
             'w ab cd ef 123456' would write the bytes 0xab,
             0xcd, 0xef, 0x12, 0x34, 0x56 to standard error
             in that order.

exit/quit  . exit the program

";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Messages go to `out`, decoded bytes go to `sink`.
pub struct Repl<O, S> {
    prompt: String,
    out: O,
    sink: S,
}

impl<O: Write, S: Write> Repl<O, S> {
    pub fn new(prompt: String, out: O, sink: S) -> Self {
        Repl { prompt, out, sink }
    }

    pub fn eval(&mut self, line: &str) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Some(command) => command,
            None => return Ok(Flow::Continue),
        };
        log::debug!("{:?}", command);

        match command {
            Command::Help => self.out.write_all(HELP.as_bytes())?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Write(clusters) => match cluster::decode_clusters(clusters) {
                Ok(bytes) => {
                    self.sink.write_all(&bytes)?;
                    self.sink.flush()?;
                }
                Err(e) => writeln!(self.out, "ERROR: {}", e)?,
            },
            Command::Unknown(name) => writeln!(self.out, "Unrecognized command '{}'", name)?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt, read and evaluate lines until `exit`/`quit` or end of input.
    /// Bytes that are not UTF-8 reach `eval` as U+FFFD.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.out)?;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            if self.eval(line.trim_end_matches(&['\n', '\r'][..]))? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Interactive variant of `run` with line editing and history.
    pub fn run_editor(&mut self) -> Result<(), ReadlineError> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(&self.prompt) {
                Ok(line) => {
                    editor.add_history_entry(line.as_str())?;
                    if self.eval(&line)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                    writeln!(self.out)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, S) {
        (self.out, self.sink)
    }
}
