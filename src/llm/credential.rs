//! API credential resolution
//!
//! The credential is resolved once per process and handed to the client at
//! construction time. Lookup order: configured key, `OPENAI_API_KEY`, then an
//! optional interactive prompt.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, info};

/// Environment variable checked when no key is configured
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// An API key; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the authorization header only
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Resolve from the configured value and the environment, without prompting
    #[must_use]
    pub fn from_sources(configured: Option<&str>, env_value: Option<String>) -> Option<Self> {
        if let Some(key) = non_blank(configured) {
            debug!("Using API key from configuration");
            return Some(Self::new(key));
        }
        if let Some(key) = non_blank(env_value.as_deref()) {
            debug!("Using API key from {}", API_KEY_ENV);
            return Some(Self::new(key));
        }
        None
    }

    /// Ask for a key on the process terminal
    ///
    /// Typing is hidden when stdin is a terminal; piped input is read as a line.
    pub fn prompt_stdin() -> io::Result<Option<Self>> {
        if !io::stdin().is_terminal() {
            return Self::prompt(&mut io::stdin().lock(), &mut io::stdout());
        }

        println!("Please set your OpenAI API key in the environment variable `{API_KEY_ENV}`");
        let line = rpassword::prompt_password("Enter your OpenAI API key: ")?;
        Ok(Self::from_entry(&line))
    }

    /// Ask for a key on `input`, writing the question to `output`
    ///
    /// Returns `None` when the user enters nothing.
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<Option<Self>> {
        writeln!(
            output,
            "Please set your OpenAI API key in the environment variable `{API_KEY_ENV}`"
        )?;
        write!(output, "Enter your OpenAI API key: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(Self::from_entry(&line))
    }

    fn from_entry(line: &str) -> Option<Self> {
        let key = non_blank(Some(line)).map(Self::new);
        if key.is_some() {
            info!("API key provided interactively");
        }
        key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
