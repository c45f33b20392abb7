use indicatif::{ProgressBar, ProgressStyle};

use crate::{cli::report_warnings, error, info, management::LibraryManager, success};

pub async fn update_progress(manager: &mut LibraryManager, id: u32, progress: i64) {
    let change = match manager.update_progress(id, progress).await {
        Ok(change) => change,
        Err(e) => error!("Cannot update progress. Err: {}", e),
    };
    report_warnings(&change.warnings);

    let update = change.value;
    if update.completed {
        let snapshot = manager.snapshot();
        success!("Finished '{}'! Well done.", update.book.title);
        info!("Current streak: {} days", snapshot.streak);
        info!("Books read this month: {}", snapshot.read_this_month);
    } else {
        success!("'{}' is now at {}%", update.book.title, update.book.progress);
    }
}

pub fn streak(manager: &LibraryManager) {
    let snapshot = manager.snapshot();
    info!("Current streak: {} days", snapshot.streak);
    match snapshot.last_date {
        Some(date) => info!("Last book finished on {}", date),
        None => info!("Finish a book to start your streak!"),
    }
}

/// Shows the monthly goal, setting it first when `set` is given.
pub async fn goal(manager: &mut LibraryManager, set: Option<i64>) {
    if let Some(goal) = set {
        let change = manager.set_monthly_goal(goal).await;
        report_warnings(&change.warnings);
        success!("Goal set to {} books per month!", change.value);
    }

    let snapshot = manager.snapshot();
    if snapshot.goal == 0 {
        info!("Set a monthly goal to track your progress!");
        return;
    }

    draw_bar(
        snapshot.read_this_month as u64,
        snapshot.goal as u64,
        "books read this month",
    );
}

pub(crate) fn draw_bar(position: u64, length: u64, message: &'static str) {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::with_template("{bar:30.green/white} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉░"),
    );
    pb.set_position(position.min(length));
    pb.abandon_with_message(message);
}
