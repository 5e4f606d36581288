//! Runtime-agnostic command table and transcript model for the desktop terminal.
//!
//! The terminal accepts a single line, resolves its first token against a static command table,
//! and produces transcript lines plus an optional [`ShellEffect`] for the host (clearing the
//! transcript or opening an application). Nothing here touches Leptos or the browser, so the
//! whole surface is unit-testable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Prompt printed before every echoed command.
pub const PROMPT: &str = "guest@azul-estudio ~ %";

/// Transcript shown when a terminal window mounts.
pub const WELCOME_LINES: [&str; 3] = [
    "Bienvenido a Azul Estudio Terminal v1.0.0",
    "Escribe 'help' para ver la lista de comandos disponibles.",
    "",
];

/// Maximum transcript lines retained before the oldest are dropped.
pub const MAX_TRANSCRIPT_LINES: usize = 200;

/// Maximum submitted commands retained for arrow-key recall.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Fixed identity printed by `whoami`.
pub const GUEST_IDENTITY: &str = "guest_user";

/// Output of `ls`.
pub const LISTING: &str =
    "about  projects  experience  skills  contact  browser  skills.txt  secret.txt";

/// Application keys `open` accepts.
pub const OPENABLE_APPS: [&str; 7] = [
    "about",
    "projects",
    "experience",
    "skills",
    "contact",
    "browser",
    "terminal",
];

/// Files readable with `cat`.
pub const CANNED_FILES: [(&str, &str); 2] = [
    (
        "skills.txt",
        "React, TypeScript, Tailwind, Node.js, UI/UX Design...",
    ),
    (
        "secret.txt",
        "¡Has encontrado el easter egg! 🥚 Gracias por visitar mi portafolio.",
    ),
];

/// Help metadata for one built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command token.
    pub name: &'static str,
    /// Usage column shown in help.
    pub usage: &'static str,
    /// Summary column shown in help.
    pub summary: &'static str,
}

/// Built-in commands in help order.
pub const COMMANDS: [CommandSpec; 7] = [
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Muestra esta ayuda",
    },
    CommandSpec {
        name: "whoami",
        usage: "whoami",
        summary: "Muestra el usuario actual",
    },
    CommandSpec {
        name: "ls",
        usage: "ls",
        summary: "Lista las 'apps' disponibles",
    },
    CommandSpec {
        name: "open",
        usage: "open [app]",
        summary: "Abre una aplicación (ej: open projects)",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        summary: "Limpia la pantalla",
    },
    CommandSpec {
        name: "date",
        usage: "date",
        summary: "Muestra la fecha actual",
    },
    CommandSpec {
        name: "cat",
        usage: "cat [file]",
        summary: "Lee un archivo (ej: cat skills.txt)",
    },
];

/// A parsed terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `help`
    Help,
    /// `clear`
    Clear,
    /// `whoami`
    Whoami,
    /// `date`
    Date,
    /// `ls`
    Ls,
    /// `cat [file]`
    Cat(Option<String>),
    /// `open [app]`
    Open(Option<String>),
    /// Blank input.
    Empty,
    /// Any other first token.
    Unknown(String),
}

impl ShellCommand {
    /// Parses a raw input line.
    ///
    /// Input is trimmed and lower-cased; the first space-separated token selects the command
    /// and the second one, if any, is its argument.
    pub fn parse(line: &str) -> Self {
        let clean = line.trim().to_lowercase();
        let mut parts = clean.split(' ');
        let command = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);

        match command {
            "" => Self::Empty,
            "help" => Self::Help,
            "clear" => Self::Clear,
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "ls" => Self::Ls,
            "cat" => Self::Cat(arg),
            "open" => Self::Open(arg),
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Host-visible side effect requested by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Drop every transcript line.
    ClearTranscript,
    /// Ask the desktop to open the application with this key.
    OpenApp(String),
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellOutcome {
    /// Lines appended after the echoed prompt.
    pub lines: Vec<String>,
    /// Optional host effect.
    pub effect: Option<ShellEffect>,
}

impl ShellOutcome {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            effect: None,
        }
    }
}

/// Environment queried by commands that depend on the host.
pub trait ShellEnvironment {
    /// Current local date/time string for `date`.
    fn now(&self) -> String;
}

/// Help text lines, ending with a blank separator.
pub fn help_lines() -> Vec<String> {
    std::iter::once("Comandos disponibles:".to_string())
        .chain(
            COMMANDS
                .iter()
                .map(|spec| format!("  {:<12}- {}", spec.usage, spec.summary)),
        )
        .chain(std::iter::once(String::new()))
        .collect()
}

fn read_canned_file(name: &str) -> Option<&'static str> {
    CANNED_FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, contents)| *contents)
}

/// Runs a parsed command.
pub fn execute(command: &ShellCommand, env: &dyn ShellEnvironment) -> ShellOutcome {
    match command {
        ShellCommand::Help => ShellOutcome {
            lines: help_lines(),
            effect: None,
        },
        ShellCommand::Clear => ShellOutcome {
            lines: Vec::new(),
            effect: Some(ShellEffect::ClearTranscript),
        },
        ShellCommand::Whoami => ShellOutcome::line(GUEST_IDENTITY),
        ShellCommand::Date => ShellOutcome::line(env.now()),
        ShellCommand::Ls => ShellOutcome::line(LISTING),
        ShellCommand::Cat(None) => ShellOutcome::line("cat: falta el argumento de archivo"),
        ShellCommand::Cat(Some(name)) => match read_canned_file(name) {
            Some(contents) => ShellOutcome::line(contents),
            None => ShellOutcome::line(format!(
                "cat: {name}: No existe el archivo o directorio"
            )),
        },
        ShellCommand::Open(None) => ShellOutcome::line("Uso: open [nombre_app]"),
        ShellCommand::Open(Some(app)) if OPENABLE_APPS.contains(&app.as_str()) => ShellOutcome {
            lines: vec![format!("Abriendo {app}...")],
            effect: Some(ShellEffect::OpenApp(app.clone())),
        },
        ShellCommand::Open(Some(app)) => {
            ShellOutcome::line(format!("Error: Aplicación '{app}' no encontrada."))
        }
        ShellCommand::Empty => ShellOutcome::line(""),
        ShellCommand::Unknown(name) => {
            ShellOutcome::line(format!("zsh: command not found: {name}"))
        }
    }
}

/// Scrollback of a terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            lines: WELCOME_LINES.iter().map(|line| line.to_string()).collect(),
        }
    }
}

impl Transcript {
    /// Current lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Runs `input` and records it.
    ///
    /// Every command except `clear` echoes `PROMPT input` before its output. Returns the
    /// effect the host still has to perform; `ClearTranscript` is applied here already.
    pub fn submit(&mut self, input: &str, env: &dyn ShellEnvironment) -> Option<ShellEffect> {
        let command = ShellCommand::parse(input);
        let outcome = execute(&command, env);

        if outcome.effect == Some(ShellEffect::ClearTranscript) {
            self.lines.clear();
            return None;
        }

        self.lines.push(format!("{PROMPT} {input}"));
        self.lines.extend(outcome.lines);
        if self.lines.len() > MAX_TRANSCRIPT_LINES {
            let overflow = self.lines.len() - MAX_TRANSCRIPT_LINES;
            self.lines.drain(0..overflow);
        }
        outcome.effect
    }
}

/// Submitted-command recall for arrow-key navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl InputHistory {
    /// Records a submitted line and resets the recall cursor. Blank lines are skipped.
    pub fn record(&mut self, line: &str) {
        self.cursor = None;
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let overflow = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(0..overflow);
        }
    }

    /// Steps to the previous (older) entry.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(idx) => idx - 1,
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Steps to the next (newer) entry; `None` once past the newest entry.
    pub fn next(&mut self) -> Option<&str> {
        let idx = self.cursor?;
        if idx + 1 >= self.entries.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(idx + 1);
        self.entries.get(idx + 1).map(String::as_str)
    }
}
