mod library;
mod manager;
mod progress;
pub mod storage;

pub use library::LibraryStore;
pub use library::ProgressUpdate;
pub use manager::LibraryManager;
pub use progress::ProgressTracker;
