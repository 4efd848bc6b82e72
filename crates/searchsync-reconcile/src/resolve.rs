//! Connection-setting resolution.
//!
//! Each setting is looked up in the process environment, then the loaded
//! [`Config`], then by asking on the terminal, then from its default. Blank
//! values count as absent. Environment access and prompting are injected so
//! resolution can run without a real terminal.

use std::fmt;
use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};

use crate::config::Config;
use crate::error::{SyncError, SyncResult};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    ConfigFile,
    Prompt,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Environment => "environment",
            Self::ConfigFile => "config file",
            Self::Prompt => "prompt",
            Self::Default => "default",
        })
    }
}

/// A setting to resolve.
#[derive(Debug, Clone, Copy)]
pub struct Setting<'a> {
    /// Human-readable name, used in the prompt and in errors.
    pub label: &'a str,
    pub env_var: &'a str,
    pub configured: Option<&'a str>,
    pub default: Option<&'a str>,
    /// Hide the answer while it is typed.
    pub secret: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// Asks the operator for a missing value.
pub trait Prompter {
    /// Ask for `label`, hiding the input when `secret` is set. `Ok(None)`
    /// means no answer is available.
    fn ask(&mut self, label: &str, secret: bool) -> io::Result<Option<String>>;
}

/// Prompts on the controlling terminal.
///
/// Gives no answer when stdin is not a terminal, so piped runs fall through
/// to the next source instead of blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str, secret: bool) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return Ok(None);
        }

        let answer = if secret {
            Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
        };
        answer.map(Some).map_err(io::Error::other)
    }
}

/// Never prompts; used for non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask(&mut self, _label: &str, _secret: bool) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Settings needed to open the database connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub uri: String,
    pub database: String,
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URI usually embeds credentials.
        f.debug_struct("ConnectionSettings")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Resolves settings from the ordered sources.
pub struct Resolver<E, P> {
    env: E,
    prompter: P,
}

impl<E, P> fmt::Debug for Resolver<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl<P: Prompter> Resolver<fn(&str) -> Option<String>, P> {
    /// Resolver reading the real process environment.
    pub fn from_process_env(prompter: P) -> Self {
        Self::new(process_env, prompter)
    }
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl<E, P> Resolver<E, P>
where
    E: Fn(&str) -> Option<String>,
    P: Prompter,
{
    pub fn new(env: E, prompter: P) -> Self {
        Self { env, prompter }
    }

    /// Resolve one setting, trying each source in order.
    pub fn resolve(&mut self, setting: &Setting<'_>) -> SyncResult<Resolved> {
        if let Some(value) = present((self.env)(setting.env_var).as_deref()) {
            return Ok(Resolved {
                value: value.to_string(),
                source: Source::Environment,
            });
        }

        if let Some(value) = present(setting.configured) {
            return Ok(Resolved {
                value: value.to_string(),
                source: Source::ConfigFile,
            });
        }

        let answer = self.prompter.ask(setting.label, setting.secret)?;
        if let Some(value) = present(answer.as_deref()) {
            return Ok(Resolved {
                value: value.to_string(),
                source: Source::Prompt,
            });
        }

        if let Some(value) = present(setting.default) {
            return Ok(Resolved {
                value: value.to_string(),
                source: Source::Default,
            });
        }

        Err(SyncError::MissingSetting {
            name: setting.label.to_string(),
            env_var: setting.env_var.to_string(),
        })
    }

    /// Resolve the MongoDB URI and database name.
    pub fn connection(&mut self, config: &Config) -> SyncResult<ConnectionSettings> {
        let uri = self.resolve(&Setting {
            label: "MongoDB connection string",
            env_var: "MONGODB_URI",
            configured: config.mongodb_uri.as_deref(),
            default: None,
            secret: true,
        })?;
        log::debug!("MongoDB URI taken from {}", uri.source);

        let database = self.resolve(&Setting {
            label: "MongoDB database name",
            env_var: "MONGODB_DB",
            configured: config.mongodb_db.as_deref(),
            default: None,
            secret: false,
        })?;
        log::debug!("MongoDB database taken from {}", database.source);

        Ok(ConnectionSettings {
            uri: uri.value,
            database: database.value,
        })
    }
}
