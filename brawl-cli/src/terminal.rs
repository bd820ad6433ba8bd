use std::io::{
    BufRead,
    Write,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use brawl::{
    BattleEvent,
    BattleOutcome,
    Display,
    InputSource,
    Prompt,
    Side,
};
use log::warn;

use crate::art;

/// Reads one trimmed line, returning [`None`] at end of input.
pub fn read_line<R>(reader: &mut R) -> Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// An [`InputSource`] that asks the player on a terminal.
///
/// Invalid answers are reported and asked again.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> TerminalInput<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_prompt(&mut self, prompt: &Prompt) -> Result<()> {
        writeln!(self.writer, "{}", prompt.message)?;
        for option in &prompt.options {
            writeln!(self.writer, "  {}. {}", option.token, option.label)?;
        }
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R, W> InputSource for TerminalInput<R, W>
where
    R: BufRead,
    W: Write,
{
    fn request_choice(&mut self, prompt: &Prompt) -> Result<String> {
        self.write_prompt(prompt)?;
        loop {
            let token = read_line(&mut self.reader)?
                .ok_or_else(|| Error::msg("input closed before a choice was made"))?;
            if prompt.is_valid(&token) {
                return Ok(token);
            }
            write!(self.writer, "Invalid choice. Try again.\n> ")?;
            self.writer.flush()?;
        }
    }
}

fn side_owner(side: Side) -> &'static str {
    match side {
        Side::Player => "Your",
        Side::Computer => "Computer's",
    }
}

/// Renders an event for the terminal.
pub fn describe_event(event: &BattleEvent) -> String {
    match event {
        BattleEvent::DraftPick { side, creature } => match side {
            Side::Player => format!("You drafted {creature}!"),
            Side::Computer => format!("Computer drafted {creature}!"),
        },
        BattleEvent::RoundStarted {
            turn,
            player,
            computer,
        } => format!(
            "\n=== Turn {turn} ===\nYour {}: {}/{} HP\nComputer's {}: {}/{} HP\n",
            player.name, player.hp, player.max_hp, computer.name, computer.hp, computer.max_hp
        ),
        BattleEvent::AttackResolved {
            attacker,
            attack,
            damage,
            ..
        } => format!("{attacker} used {attack} and dealt {damage} damage!"),
        BattleEvent::SwapOccurred {
            side,
            creature,
            forced,
        } => match (side, forced) {
            (Side::Player, _) => format!("You sent out {creature}!"),
            (Side::Computer, true) => format!("Computer sent out {creature}!"),
            (Side::Computer, false) => format!("Computer swapped to {creature}!"),
        },
        BattleEvent::Fainted { side, creature } => {
            format!("{} {creature} fainted!", side_owner(*side))
        }
        BattleEvent::BattleEnded(outcome) => {
            let art = match outcome.winner() {
                Side::Player => art::VICTORY,
                Side::Computer => art::DEFEAT,
            };
            match outcome {
                BattleOutcome::Forfeit { forfeiter } => {
                    format!("{} forfeited the battle!{art}", forfeiter.name())
                }
                BattleOutcome::Victory { winner } => format!("{} wins!{art}", winner.name()),
            }
        }
    }
}

/// A [`Display`] that writes events to a terminal.
pub struct TerminalDisplay<W> {
    writer: W,
}

impl<W> TerminalDisplay<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prints the title banner.
    pub fn banner(&mut self) {
        self.write(art::TITLE);
        self.write("Draft your squad, then battle the computer. Attack, swap, or forfeit each turn.\n");
    }

    fn write(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{text}") {
            warn!("Failed to write to terminal: {err}");
        }
    }
}

impl<W> Display for TerminalDisplay<W>
where
    W: Write,
{
    fn show(&mut self, event: &BattleEvent) {
        self.write(&describe_event(event));
    }
}
