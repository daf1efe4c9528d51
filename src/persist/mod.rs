//! Best-score persistence.
//!
//! The engine's only I/O: a single non-negative integer read at
//! construction and written whenever the current score surpasses it.
//! Store failures degrade to "best unknown, treat as zero" and never
//! abort the round.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Fixed identifier the best score is persisted under.
pub const BEST_SCORE_KEY: &str = "bloxcore_best_v1";

/// Where the best score lives between rounds.
///
/// `load` must not fail: return 0 when nothing usable is stored. `save`
/// must not fail either: the write is an idempotent monotonic update,
/// so a lost write only costs a stale best.
pub trait BestScoreStore {
    /// Read the persisted best score, or 0 if unavailable.
    fn load(&self) -> u64;

    /// Persist a new best score.
    fn save(&mut self, best: u64);
}

/// In-memory store for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryBestScore {
    best: u64,
}

impl MemoryBestScore {
    /// Create a store holding the given best.
    #[must_use]
    pub fn new(best: u64) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> u64 {
        self.best
    }

    fn save(&mut self, best: u64) {
        self.best = best;
    }
}

/// File-backed store: the score as decimal text in a file named after
/// [`BEST_SCORE_KEY`] inside the given directory.
#[derive(Clone, Debug)]
pub struct FileBestScore {
    path: PathBuf,
}

impl FileBestScore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(BEST_SCORE_KEY),
        }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileBestScore {
    fn load(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // A missing file is the normal first-run case.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "best score unreadable, treating as 0");
                return 0;
            }
        };

        match text.trim().parse() {
            Ok(best) => best,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "best score corrupt, treating as 0");
                0
            }
        }
    }

    fn save(&mut self, best: u64) {
        if let Err(err) = fs::write(&self.path, best.to_string()) {
            warn!(path = %self.path.display(), %err, "failed to persist best score");
        }
    }
}
