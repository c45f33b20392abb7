use crate::{cli::progress::draw_bar, info, management::LibraryManager, success, types::Genre, utils};

pub fn achievements(manager: &LibraryManager) {
    let earned = manager.achievements_earned();
    if earned.is_empty() {
        info!("Read more books to unlock achievements!");
    }
    for achievement in &earned {
        success!("{}", achievement);
    }

    if let Some(target) = manager.next_achievement_target() {
        let total = manager.list_all().len() as u64;
        draw_bar(total, target as u64, "books to the next achievement");
    }

    info!("Current streak: {} days", manager.snapshot().streak);
}

pub fn recommend(genre: Genre) {
    match utils::recommend(genre) {
        Some(title) => success!("Try reading: {}", title),
        None => {
            let genres: Vec<String> = utils::recommendation_genres()
                .iter()
                .map(|g| g.to_string())
                .collect();
            info!(
                "No recommendations available for {} yet! Try one of: {}",
                genre,
                genres.join(", ")
            );
        }
    }
}
