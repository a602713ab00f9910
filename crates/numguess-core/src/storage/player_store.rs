use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::game::{Player, Score};

/// All players, persisted as one JSON array in insertion order.
///
/// Every write rewrites the whole file (read-modify-write). There is no
/// locking, so two processes saving at once lose one of the updates.
pub struct PlayerStore {
    path: PathBuf,
}

impl PlayerStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored player.
    ///
    /// A missing file is created holding an empty collection. A file that
    /// exists but cannot be parsed is reported as [`Error::CorruptStore`].
    pub fn load_all(&self) -> Result<Vec<Player>> {
        let content = match fs::read_to_string(&self.path).map_err(Error::from) {
            Ok(c) => c,
            Err(e) if e.is_not_found() => {
                debug!("No player store at {}, creating it", self.path.display());
                self.write_all(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let players: Vec<Player> =
            serde_json::from_str(&content).map_err(|e| Error::CorruptStore {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        debug!(
            "Loaded {} players from {}",
            players.len(),
            self.path.display()
        );
        Ok(players)
    }

    /// First player whose username matches exactly (case-sensitive)
    pub fn find_by_username(&self, username: &str) -> Result<Option<Player>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|player| player.username == username))
    }

    /// Write `player` back to the store.
    ///
    /// A player without a store index is appended and given the next
    /// index; one with an index overwrites the entry at that position.
    pub fn save(&self, player: &mut Player) -> Result<()> {
        let mut players = self.load_all()?;

        match player.store_index() {
            Some(index) if index < players.len() => {
                players[index] = player.clone();
            }
            Some(index) => {
                return Err(Error::StaleIndex {
                    username: player.username.clone(),
                    index,
                    len: players.len(),
                });
            }
            None => {
                player.assign_store_index(players.len());
                players.push(player.clone());
            }
        }

        self.write_all(&players)
    }

    /// Create a player with the zero score and persist it immediately.
    ///
    /// Does not check for an existing player with the same name; use
    /// [`PlayerStore::find_or_register`] for that.
    pub fn register(&self, username: &str) -> Result<Player> {
        let mut player = Player::new(username);
        self.save(&mut player)?;
        info!("Registered player {:?}", player.username);
        Ok(player)
    }

    /// Load an existing player by name or register a new one
    pub fn find_or_register(&self, username: &str) -> Result<Player> {
        match self.find_by_username(username)? {
            Some(player) => {
                debug!("Found existing player {:?}", username);
                Ok(player)
            }
            None => self.register(username),
        }
    }

    /// Offer `score` as the player's new best, saving only if it was kept
    pub fn record_score(&self, player: &mut Player, score: Score) -> Result<bool> {
        let replaced = player.set_score(score);
        if replaced {
            self.save(player)?;
            info!(
                "New best score for {:?}: {}",
                player.username,
                player.best_score().value
            );
        }
        Ok(replaced)
    }

    /// Replace the file contents via a sibling temp file and rename, so a
    /// crash mid-write leaves the previous store intact.
    fn write_all(&self, players: &[Player]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(players)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
