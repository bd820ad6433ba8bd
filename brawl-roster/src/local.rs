use std::{
    fs::{
        self,
        File,
    },
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Result,
};
use brawl::{
    Creature,
    RosterStore,
    ValidationError,
    WrapError,
    WrapOptionError,
    general_error,
};
use log::{
    debug,
    info,
};

use crate::CreatureUpdate;

/// An implementation of [`RosterStore`] backed by a single JSON file on disk.
///
/// Every edit is written back to the file immediately.
#[derive(Debug)]
pub struct LocalRosterStore {
    path: PathBuf,
    creatures: Vec<Creature>,
}

impl LocalRosterStore {
    /// Opens the roster at the given path.
    ///
    /// A missing file is an empty roster. It is created on the first edit.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let creatures = if path.is_file() {
            let file = File::open(&path)
                .with_context(|| format!("failed to open roster {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse roster {}", path.display()))?
        } else {
            debug!("Roster {} does not exist, starting empty", path.display());
            Vec::new()
        };
        Ok(Self { path, creatures })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All creatures, in roster order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn get(&self, index: usize) -> Result<&Creature> {
        self.creatures
            .get(index)
            .wrap_not_found_error(format!("creature {index}"))
    }

    /// Adds a new creature to the end of the roster.
    pub fn add(&mut self, creature: Creature) -> Result<()> {
        self.validate_name(&creature.name, None)?;
        info!("Adding {} to roster", creature.name);
        let mut creatures = self.creatures.clone();
        creatures.push(creature);
        self.commit(creatures)
    }

    /// Edits the creature at the given index.
    pub fn update(&mut self, index: usize, update: &CreatureUpdate) -> Result<&Creature> {
        let updated = update.apply(self.get(index)?)?;
        self.validate_name(&updated.name, Some(index))?;
        info!("Updating {} in roster", updated.name);
        let mut creatures = self.creatures.clone();
        creatures[index] = updated;
        self.commit(creatures)?;
        self.get(index)
    }

    /// Removes the creature at the given index.
    pub fn remove(&mut self, index: usize) -> Result<Creature> {
        self.get(index)?;
        let mut creatures = self.creatures.clone();
        let creature = creatures.remove(index);
        info!("Removing {} from roster", creature.name);
        self.commit(creatures)?;
        Ok(creature)
    }

    /// Replaces the roster only once the new contents are on disk.
    fn commit(&mut self, creatures: Vec<Creature>) -> Result<()> {
        self.write(&creatures)?;
        self.creatures = creatures;
        Ok(())
    }

    /// Writes the given creatures to disk as pretty-printed JSON.
    fn write(&self, creatures: &[Creature]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(creatures).context("failed to serialize roster")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write roster {}", self.path.display()))?;
        debug!("Saved {} creatures to {}", creatures.len(), self.path.display());
        Ok(())
    }

    fn validate_name(&self, name: &str, skip: Option<usize>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::from_iter(["creature name cannot be empty"]).wrap_error());
        }
        let taken = self
            .creatures
            .iter()
            .enumerate()
            .any(|(i, creature)| Some(i) != skip && creature.name == name);
        if taken {
            return Err(general_error(format!("{name} is already in the roster")));
        }
        Ok(())
    }
}

impl RosterStore for LocalRosterStore {
    fn list_creatures(&self) -> Result<Vec<Creature>> {
        Ok(self.creatures.clone())
    }
}
