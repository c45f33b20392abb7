use chrono::NaiveDate;
use libquest::types::Genre;
use libquest::utils::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_clamp_progress() {
    assert_eq!(clamp_progress(-20), 0);
    assert_eq!(clamp_progress(0), 0);
    assert_eq!(clamp_progress(42), 42);
    assert_eq!(clamp_progress(100), 100);
    assert_eq!(clamp_progress(250), 100);
    assert_eq!(clamp_progress(i64::MIN), 0);
    assert_eq!(clamp_progress(i64::MAX), 100);
}

#[test]
fn test_valid_years() {
    let years = valid_years(2026);
    assert!(years.contains(&1000));
    assert!(years.contains(&2026));
    assert!(!years.contains(&999));
    assert!(!years.contains(&2027));
}

#[test]
fn test_day_step() {
    let last = date(2026, 3, 10);

    assert_eq!(day_step(last, date(2026, 3, 10)), DayStep::SameDay);
    assert_eq!(day_step(last, date(2026, 3, 11)), DayStep::NextDay);
    assert_eq!(day_step(last, date(2026, 3, 12)), DayStep::Broken);

    // clock moved backwards
    assert_eq!(day_step(last, date(2026, 3, 9)), DayStep::Broken);

    // across month and year boundaries
    assert_eq!(day_step(date(2026, 2, 28), date(2026, 3, 1)), DayStep::NextDay);
    assert_eq!(day_step(date(2025, 12, 31), date(2026, 1, 1)), DayStep::NextDay);
}

#[test]
fn test_same_month() {
    let today = date(2026, 1, 15);
    assert!(same_month(1, Some(2026), today));
    assert!(!same_month(12, Some(2025), today));

    // the same month a year later is a new month
    assert!(!same_month(1, Some(2025), today));

    // files without a year only compare the month
    assert!(same_month(1, None, today));
    assert!(!same_month(2, None, today));
}

#[test]
fn test_earned_achievements() {
    let names = |n: usize| -> Vec<&'static str> { earned_achievements(n).iter().map(|a| a.name).collect() };

    assert!(names(0).is_empty());
    assert!(names(4).is_empty());
    assert_eq!(names(5), vec!["Novice Reader"]);
    assert_eq!(names(19), vec!["Novice Reader"]);
    assert_eq!(names(20), vec!["Novice Reader", "Book Worm"]);
    assert_eq!(names(50), vec!["Novice Reader", "Book Worm", "Literary Master"]);
    assert_eq!(names(500), vec!["Novice Reader", "Book Worm", "Literary Master"]);
}

#[test]
fn test_achievement_display() {
    let earned = earned_achievements(5);
    assert_eq!(earned[0].to_string(), "🏆 Novice Reader");
}

#[test]
fn test_next_achievement_target() {
    assert_eq!(next_achievement_target(0), Some(5));
    assert_eq!(next_achievement_target(5), Some(20));
    assert_eq!(next_achievement_target(49), Some(50));
    assert_eq!(next_achievement_target(50), None);
}

#[test]
fn test_recommend() {
    for _ in 0..20 {
        let title = recommend(Genre::SciFi).unwrap();
        assert!(title == "Dune" || title == "Foundation");
    }

    assert_eq!(recommend(Genre::Mystery), None);
    assert_eq!(
        recommendation_genres(),
        vec![Genre::Fiction, Genre::SciFi, Genre::Fantasy]
    );
}

#[test]
fn test_parse_genre() {
    assert_eq!(parse_genre("Sci-Fi"), Ok(Genre::SciFi));
    assert_eq!(parse_genre("non-fiction"), Ok(Genre::NonFiction));
    assert_eq!(parse_genre("  Fantasy "), Ok(Genre::Fantasy));

    let err = parse_genre("Poetry").unwrap_err();
    assert!(err.contains("Poetry"));
    assert!(err.contains("Thriller"));
}

#[test]
fn test_encode_cover() {
    assert_eq!(encode_cover(b"png"), "cG5n");
    assert_eq!(encode_cover(&[]), "");
}
