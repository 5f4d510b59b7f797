use std::fs;
use std::io;
use std::path::PathBuf;

use crate::settings::Settings;

/// Per-round statistics plus the all-time high score.
///
/// Everything except `high_score` resets when a new round starts. The high
/// score is loaded from disk at construction and written back the moment it
/// is exceeded, so quitting mid-round never loses it.
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    path: PathBuf,
}

impl GameStats {
    pub fn load(settings: &Settings) -> Self {
        Self::with_path(settings, Self::high_score_path())
    }

    pub fn with_path(settings: &Settings, path: PathBuf) -> Self {
        let mut stats = GameStats {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score: 0,
            path,
        };
        stats.high_score = stats.read_high_score();
        stats
    }

    fn high_score_path() -> PathBuf {
        match dirs::data_local_dir() {
            Some(dir) => dir.join("alien-invasion").join("high_score.json"),
            None => PathBuf::from("high_score.json"),
        }
    }

    /// A missing or unreadable file is not an error, just a fresh start.
    fn read_high_score(&self) -> u32 {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return 0;
        };
        serde_json::from_str(&contents).unwrap_or(0)
    }

    fn write_high_score(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // The file holds a bare JSON number.
        fs::write(&self.path, serde_json::to_string(&self.high_score)?)
    }

    /// Reset the stats that change during play. The high score survives.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Promote the current score to high score if it beats it, persisting
    /// immediately. Returns true when a new record was set.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            let _ = self.write_high_score();
            true
        } else {
            false
        }
    }
}
