/// One line of REPL input, split into a command and its clusters.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Quit,
    Write(Vec<&'a str>),
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Returns `None` for a blank line.
    pub fn parse(line: &'a str) -> Option<Command<'a>> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        Some(match name {
            "help" => Command::Help,
            "exit" | "quit" => Command::Quit,
            "write" | "w" => Command::Write(tokens.collect()),
            _ => Command::Unknown(name),
        })
    }
}
