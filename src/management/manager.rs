use crate::{
    config::StoragePaths,
    error::{Change, LibraryError},
    management::{LibraryStore, ProgressTracker, ProgressUpdate},
    types::{Achievement, Book, NewBook, ProgressSnapshot},
};

/// A user's session: the library and the progress tracker, loaded once and
/// passed by reference to every handler.
///
/// The two stores load independently, so a broken progress file never keeps
/// the books from loading and the other way round.
pub struct LibraryManager {
    library: LibraryStore,
    progress: ProgressTracker,
}

impl LibraryManager {
    pub fn new(library: LibraryStore, progress: ProgressTracker) -> Self {
        Self { library, progress }
    }

    pub async fn load(paths: &StoragePaths) -> Self {
        let library = LibraryStore::load(paths.library.clone()).await;
        let progress = ProgressTracker::load(paths.user_data.clone()).await;
        Self { library, progress }
    }

    pub async fn add(&mut self, new: NewBook) -> Result<Change<Book>, LibraryError> {
        self.library.add(new).await
    }

    pub async fn remove(&mut self, id: u32) -> Result<Change<Book>, LibraryError> {
        self.library.remove(id).await
    }

    pub async fn update_progress(
        &mut self,
        id: u32,
        progress: i64,
    ) -> Result<Change<ProgressUpdate>, LibraryError> {
        self.library
            .update_progress(id, progress, &mut self.progress)
            .await
    }

    pub async fn set_monthly_goal(&mut self, goal: i64) -> Change<u32> {
        self.progress.set_monthly_goal(goal).await
    }

    pub fn list_all(&self) -> &[Book] {
        self.library.list_all()
    }

    pub fn get(&self, id: u32) -> Option<Book> {
        self.library.get(id)
    }

    pub fn achievements_earned(&self) -> Vec<Achievement> {
        self.library.achievements_earned()
    }

    pub fn next_achievement_target(&self) -> Option<usize> {
        self.library.next_achievement_target()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }
}
