use crate::Error;

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(String),
    Search(String),
    OlderThan(u32),
    Birthday(Option<String>),
    Check,
}

impl Config {
    /// Reads the command line, falling back to `ROSTER_FILE` and then to the
    /// user data directory for the roster file.
    pub fn from_env() -> Result<Self, Error> {
        Self::parse(
            env::args().skip(1),
            env::var_os("ROSTER_FILE").map(PathBuf::from),
        )
    }

    pub fn parse(
        args: impl IntoIterator<Item = String>,
        file: Option<PathBuf>,
    ) -> Result<Self, Error> {
        let mut args = args.into_iter();
        let mut file = file;
        let mut rest = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-f" | "--file" => {
                    file = Some(PathBuf::from(
                        args.next().ok_or(Error::MissingArgument("file"))?,
                    ));
                }
                _ => rest.push(arg),
            }
        }

        Ok(Self {
            file: file.unwrap_or_else(default_file),
            command: Command::parse(rest)?,
        })
    }
}

impl Command {
    fn parse(args: Vec<String>) -> Result<Self, Error> {
        let mut args = args.into_iter();

        let Some(command) = args.next() else {
            return Ok(Self::List);
        };

        let command = match command.as_str() {
            "list" => Self::List,
            "show" => Self::Show(args.next().ok_or(Error::MissingArgument("id"))?),
            "search" => Self::Search(args.next().ok_or(Error::MissingArgument("text"))?),
            "older-than" => {
                let age = args.next().ok_or(Error::MissingArgument("age"))?;

                Self::OlderThan(age.parse().map_err(|_| Error::InvalidAge(age))?)
            }
            "birthday" => Self::Birthday(args.next()),
            "check" => Self::Check,
            _ => Err(Error::UnknownCommand(command))?,
        };

        if let Some(extra) = args.next() {
            log::warn!("Ignoring extra argument: {extra}");
        }

        Ok(command)
    }
}

fn default_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("users.ron")
}
