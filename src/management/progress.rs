use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};

use crate::{
    error::{Change, StorageError},
    management::storage,
    types::{ProgressSnapshot, UserProgress},
    utils::{self, DayStep},
};

/// Owns the reading streak and the monthly goal counters.
///
/// Both are driven by the same trigger, a book reaching 100% for the first
/// time, but are evaluated as two separate machines: a broken streak never
/// touches the monthly count and a month rollover never touches the streak.
pub struct ProgressTracker {
    path: PathBuf,
    state: UserProgress,
}

impl ProgressTracker {
    pub fn new(path: impl Into<PathBuf>, state: UserProgress) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }

    /// Loads the user state, falling back to fresh counters when the file is
    /// missing or unreadable.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match storage::read_json::<UserProgress>(&path).await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot load user progress, starting fresh");
                UserProgress::default()
            }
        };
        Self { path, state }
    }

    pub fn state(&self) -> &UserProgress {
        &self.state
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::from(&self.state)
    }

    pub async fn on_book_completed(&mut self) -> Change<ProgressSnapshot> {
        self.record_completion(Local::now().date_naive()).await
    }

    /// Applies one completion that happened on `today`.
    pub async fn record_completion(&mut self, today: NaiveDate) -> Change<ProgressSnapshot> {
        self.advance_streak(today);
        self.advance_month(today);
        tracing::debug!(
            streak = self.state.reading_streak,
            this_month = self.state.books_read_this_month,
            "completion recorded"
        );

        let written = self.persist().await;
        Change::new(self.snapshot()).with_write(written)
    }

    /// Stores the goal, negative values disable it.
    pub async fn set_monthly_goal(&mut self, goal: i64) -> Change<u32> {
        let goal = goal.clamp(0, u32::MAX as i64) as u32;
        self.state.monthly_goal = goal;
        let written = self.persist().await;
        Change::new(goal).with_write(written)
    }

    pub async fn persist(&self) -> Result<(), StorageError> {
        match storage::write_json(&self.path, &self.state).await {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "user progress saved");
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to save user progress");
                Err(e)
            }
        }
    }

    fn advance_streak(&mut self, today: NaiveDate) {
        let step = self.state.last_reading_date.map(|last| utils::day_step(last, today));
        match step {
            Some(DayStep::SameDay) => return,
            Some(DayStep::NextDay) => self.state.reading_streak += 1,
            Some(DayStep::Broken) | None => self.state.reading_streak = 1,
        }
        self.state.last_reading_date = Some(today);
    }

    fn advance_month(&mut self, today: NaiveDate) {
        if !utils::same_month(self.state.month, self.state.year, today) {
            self.state.books_read_this_month = 0;
            self.state.month = today.month();
        }
        self.state.year = Some(today.year());
        self.state.books_read_this_month += 1;
    }
}
