//! Interactive console
//!
//! A raw-mode line editor feeding the slash-command dispatcher. Arrow keys
//! walk the history, Tab accepts the ghost-text suggestion, Enter submits.
//! Network calls happen outside raw mode so responses print as normal lines.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::api::{ApiClient, render_json};
use crate::command::{Command, suggestions};
use crate::field_view;
use crate::history::CommandHistory;
use crate::settings::Settings;

const PROMPT: &str = "pokebase> ";

/// Restores cooked mode even on early return or panic.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub struct Console {
    client: ApiClient,
    history: CommandHistory,
    settings: Settings,
    seed: u64,
}

impl Console {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            client: ApiClient::new(settings.api_base_url.clone()),
            history: CommandHistory::new(),
            settings,
            seed,
        }
    }

    /// Main loop: read a line, dispatch it, repeat until the user quits.
    pub fn run(&mut self) -> Result<()> {
        print_help();

        match self.client.health() {
            Ok(()) => log::info!("Backend reachable at {}", self.client.base_url()),
            Err(e) => log::warn!("Backend not reachable yet: {e}"),
        }

        loop {
            let Some(line) = self.read_line()? else {
                break;
            };
            self.history.push(&line);

            match line.trim() {
                "" => {}
                "/help" => print_help(),
                "/quit" | "/exit" => break,
                "/field" => {
                    // Different seed per visit so the field reshuffles
                    self.seed = self.seed.wrapping_add(1);
                    if let Err(e) = field_view::run(&self.settings, self.seed) {
                        log::warn!("Field view failed: {e}");
                    }
                }
                other => self.dispatch(other),
            }
        }

        Ok(())
    }

    /// Parse and execute one submitted line.
    ///
    /// A parse failure is purely local: the invalid-command message prints and
    /// no request is made. Backend failures of any kind collapse into one
    /// generic message, with the detail kept to the log.
    fn dispatch(&self, line: &str) {
        let command = match Command::parse(line) {
            Ok(c) => c,
            Err(e) => {
                println!("{e}");
                return;
            }
        };

        log::info!("Running {}", command.verb());
        let result = match &command {
            Command::GetPokemonData { name } => self.client.pokemon(name),
            Command::Compare { first, second } => self.client.compare(first, second),
            Command::Strategy { query } => self.client.strategy(query).map(|v| render_json(&v)),
            Command::Team { query } => self.client.team_building(query).map(|v| render_json(&v)),
        };

        match result {
            Ok(text) => println!("{text}"),
            Err(e) => {
                log::warn!("{} failed: {e}", command.verb());
                println!("Error processing command.");
            }
        }
    }

    /// Raw-mode line editor. Returns `None` when the user asks to leave
    /// (Esc, Ctrl+C, Ctrl+D on an empty line).
    fn read_line(&mut self) -> Result<Option<String>> {
        let _guard = RawModeGuard::enable()?;
        let mut buf = String::new();
        self.redraw(&buf)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Enter => {
                    print!("\r\n");
                    io::stdout().flush()?;
                    return Ok(Some(buf));
                }
                KeyCode::Esc => return Ok(None),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Char('d')
                    if key.modifiers.contains(KeyModifiers::CONTROL) && buf.is_empty() =>
                {
                    return Ok(None);
                }
                KeyCode::Up => {
                    if let Some(entry) = self.history.up() {
                        buf = entry.to_string();
                    }
                }
                KeyCode::Down => {
                    if let Some(entry) = self.history.down() {
                        buf = entry.to_string();
                    }
                }
                KeyCode::Tab => {
                    if let Some(first) = suggestions(&buf).first() {
                        buf = format!("{first} ");
                        self.history.reset_cursor();
                    }
                }
                KeyCode::Backspace => {
                    buf.pop();
                    self.history.reset_cursor();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buf.push(c);
                    self.history.reset_cursor();
                }
                _ => {}
            }

            self.redraw(&buf)?;
        }
    }

    /// Repaint the input line, with the first matching verb as ghost text.
    fn redraw(&self, buf: &str) -> Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(PROMPT),
            Print(buf),
        )?;

        if let Some(first) = suggestions(buf).first() {
            let ghost = &first[buf.len()..];
            queue!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print(ghost),
                ResetColor,
                MoveToColumn((PROMPT.len() + buf.len()) as u16),
            )?;
        }

        stdout.flush()?;
        Ok(())
    }
}

fn print_help() {
    println!("Use slash commands to interact with Pokebase:");
    println!("  /get-pokemon-data <name>     Get Pokémon description");
    println!("  /compare <name1> <name2>     Compare two Pokémon");
    println!("  /strategy <query>            Get strategy suggestion");
    println!("  /team <query>                Get team suggestion");
    println!();
    println!("  /field                       Watch the bubble field (q to leave)");
    println!("  /help                        Show this card");
    println!("  /quit                        Leave the console");
}
