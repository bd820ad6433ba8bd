use std::{
    io::{
        BufRead,
        Write,
    },
    str::FromStr,
};

use anyhow::{
    Error,
    Result,
};
use brawl::{
    Attack,
    Creature,
    general_error,
};
use brawl_roster::{
    CreatureUpdate,
    LocalRosterStore,
};
use itertools::Itertools;
use log::warn;

use crate::terminal::read_line;

/// Writes every creature in the roster, numbered from 1.
pub fn write_roster<W>(writer: &mut W, creatures: &[Creature]) -> Result<()>
where
    W: Write,
{
    if creatures.is_empty() {
        writeln!(writer, "No creatures in the roster.")?;
        return Ok(());
    }
    for (i, creature) in creatures.iter().enumerate() {
        writeln!(writer, "\nCreature {}:", i + 1)?;
        writeln!(writer, "  Name: {}", creature.name)?;
        writeln!(writer, "  Type: {}", creature.kind)?;
        writeln!(writer, "  HP: {}", creature.max_hp())?;
        writeln!(writer, "  Stage: {}", creature.stage)?;
        writeln!(
            writer,
            "  Attacks: {}",
            creature
                .attacks()
                .iter()
                .map(|attack| format!("{} ({})", attack.name, attack.damage))
                .join(", ")
        )?;
        writeln!(writer, "  Weakness: {}", creature.weakness)?;
        writeln!(
            writer,
            "  Resistance: {}",
            creature.resistance.as_deref().unwrap_or("None")
        )?;
    }
    Ok(())
}

fn parse_number<T>(text: &str, field: &str) -> Result<T>
where
    T: FromStr,
{
    text.parse()
        .map_err(|_| general_error(format!("{field} must be a whole number, got {text:?}")))
}

/// Interactive editor for a [`LocalRosterStore`].
///
/// Mirrors a simple numbered menu. Problems with a single action are reported and the menu is
/// shown again. The editor exits on the exit option or at the end of input.
pub struct RosterEditor<'a, R, W> {
    store: &'a mut LocalRosterStore,
    reader: R,
    writer: W,
}

impl<'a, R, W> RosterEditor<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut LocalRosterStore, reader: R, writer: W) -> Self {
        Self {
            store,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.writer, "\nRoster Manager")?;
            writeln!(self.writer, "1. Add creature")?;
            writeln!(self.writer, "2. View creatures")?;
            writeln!(self.writer, "3. Edit creature")?;
            writeln!(self.writer, "4. Delete creature")?;
            writeln!(self.writer, "5. Exit")?;
            write!(self.writer, "Enter your choice (1-5): ")?;
            self.writer.flush()?;

            let Some(choice) = read_line(&mut self.reader)? else {
                return Ok(());
            };
            let result = match choice.as_str() {
                "1" => self.add(),
                "2" => write_roster(&mut self.writer, self.store.creatures()),
                "3" => self.edit(),
                "4" => self.delete(),
                "5" => {
                    writeln!(self.writer, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(
                        self.writer,
                        "Invalid choice. Please enter a number between 1 and 5."
                    )?;
                    Ok(())
                }
            };
            if let Err(err) = result {
                warn!("Roster action failed: {err:#}");
                writeln!(self.writer, "Error: {err:#}")?;
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}: ")?;
        self.writer.flush()?;
        read_line(&mut self.reader)?.ok_or_else(|| Error::msg("input closed"))
    }

    fn ask_position(&mut self, question: &str) -> Result<usize> {
        let answer = self.ask(question)?;
        parse_number::<usize>(&answer, "creature number")?
            .checked_sub(1)
            .ok_or_else(|| general_error("creature numbers start at 1"))
    }

    fn ask_attacks(&mut self) -> Result<Vec<Attack>> {
        let mut attacks = Vec::new();
        loop {
            let name = self.ask("Enter attack name (blank when done)")?;
            if name.is_empty() {
                return Ok(attacks);
            }
            let damage = self.ask(&format!("Enter {name} damage"))?;
            attacks.push(Attack::new(name, parse_number(&damage, "damage")?));
        }
    }

    fn add(&mut self) -> Result<()> {
        let name = self.ask("Enter creature name")?;
        let kind = self.ask("Enter creature type")?;
        let max_hp = parse_number(&self.ask("Enter HP")?, "HP")?;
        let stage = self.ask("Enter stage")?;
        let stage = if stage.is_empty() {
            0
        } else {
            parse_number(&stage, "stage")?
        };
        let attacks = self.ask_attacks()?;
        let weakness = self.ask("Enter weakness")?;
        let resistance = self.ask("Enter resistance")?;

        let mut creature = Creature::new(
            name,
            kind,
            max_hp,
            attacks,
            weakness,
            (!resistance.is_empty()).then_some(resistance),
        )?;
        creature.stage = stage;
        let name = creature.name.clone();
        self.store.add(creature)?;
        writeln!(self.writer, "Added {name} successfully!")?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        write_roster(&mut self.writer, self.store.creatures())?;
        if self.store.creatures().is_empty() {
            return Ok(());
        }
        let index = self.ask_position("Enter the creature number to edit")?;
        let creature = self.store.get(index)?.clone();
        writeln!(
            self.writer,
            "Editing {}. Leave blank to keep current value.",
            creature.name
        )?;

        let mut update = CreatureUpdate::default();
        let name = self.ask(&format!("New name ({})", creature.name))?;
        update.name = (!name.is_empty()).then_some(name);
        let kind = self.ask(&format!("New type ({})", creature.kind))?;
        update.kind = (!kind.is_empty()).then_some(kind);
        let max_hp = self.ask(&format!("New HP ({})", creature.max_hp()))?;
        if !max_hp.is_empty() {
            update.max_hp = Some(parse_number(&max_hp, "HP")?);
        }
        let stage = self.ask(&format!("New stage ({})", creature.stage))?;
        if !stage.is_empty() {
            update.stage = Some(parse_number(&stage, "stage")?);
        }
        let replace = self.ask("Replace attacks? (y/N)")?;
        if replace.eq_ignore_ascii_case("y") {
            let attacks = self.ask_attacks()?;
            update.attacks = (!attacks.is_empty()).then_some(attacks);
        }
        let weakness = self.ask(&format!("New weakness ({})", creature.weakness))?;
        update.weakness = (!weakness.is_empty()).then_some(weakness);
        let resistance = self.ask(&format!(
            "New resistance ({})",
            creature.resistance.as_deref().unwrap_or("None")
        ))?;
        update.resistance = (!resistance.is_empty()).then_some(resistance);

        let updated = self.store.update(index, &update)?;
        let name = updated.name.clone();
        writeln!(self.writer, "Updated {name} successfully!")?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        write_roster(&mut self.writer, self.store.creatures())?;
        if self.store.creatures().is_empty() {
            return Ok(());
        }
        let index = self.ask_position("Enter the creature number to delete")?;
        let creature = self.store.remove(index)?;
        writeln!(self.writer, "Deleted {} successfully!", creature.name)?;
        Ok(())
    }
}
