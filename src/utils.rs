use std::ops::RangeInclusive;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Datelike, NaiveDate};
use rand::seq::IndexedRandom;

use crate::types::{Achievement, Genre};

pub const MIN_YEAR: i32 = 1000;

/// Badges in display order. A badge is earned once the library holds at least
/// `books` records.
pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        name: "Novice Reader",
        icon: "🏆",
        books: 5,
    },
    Achievement {
        name: "Book Worm",
        icon: "🐛",
        books: 20,
    },
    Achievement {
        name: "Literary Master",
        icon: "📚",
        books: 50,
    },
];

const RECOMMENDATIONS: [(Genre, &[&str]); 3] = [
    (Genre::Fiction, &["To Kill a Mockingbird", "1984"]),
    (Genre::SciFi, &["Dune", "Foundation"]),
    (Genre::Fantasy, &["Harry Potter", "Lord of the Rings"]),
];

/// How the day of a new completion relates to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    SameDay,
    NextDay,
    Broken,
}

pub fn valid_years(current_year: i32) -> RangeInclusive<i32> {
    MIN_YEAR..=current_year
}

pub fn clamp_progress(progress: i64) -> u8 {
    progress.clamp(0, 100) as u8
}

pub fn day_step(last: NaiveDate, today: NaiveDate) -> DayStep {
    match (today - last).num_days() {
        0 => DayStep::SameDay,
        1 => DayStep::NextDay,
        // gaps and clocks running backwards both break the streak
        _ => DayStep::Broken,
    }
}

pub fn same_month(month: u32, year: Option<i32>, today: NaiveDate) -> bool {
    month == today.month() && year.is_none_or(|y| y == today.year())
}

pub fn earned_achievements(total_books: usize) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| total_books >= a.books)
        .copied()
        .collect()
}

pub fn next_achievement_target(total_books: usize) -> Option<usize> {
    ACHIEVEMENTS
        .iter()
        .map(|a| a.books)
        .filter(|&books| books > total_books)
        .min()
}

pub fn recommendation_genres() -> Vec<Genre> {
    RECOMMENDATIONS.iter().map(|(g, _)| *g).collect()
}

pub fn recommend(genre: Genre) -> Option<&'static str> {
    RECOMMENDATIONS
        .iter()
        .find(|(g, _)| *g == genre)
        .and_then(|(_, titles)| titles.choose(&mut rand::rng()).copied())
}

pub fn parse_genre(s: &str) -> Result<Genre, String> {
    s.parse::<Genre>().map_err(|e| {
        let options: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
        format!("{}; expected one of: {}", e, options.join(", "))
    })
}

pub fn encode_cover(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
