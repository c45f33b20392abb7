use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{error::ValidationError, utils};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Mystery,
    Biography,
    Romance,
    Thriller,
    #[default]
    Other,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Biography,
        Genre::Romance,
        Genre::Thriller,
        Genre::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SciFi => "Sci-Fi",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Biography => "Biography",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown genre '{}'", wanted))
    }
}

// stored files may carry genres written by older versions
impl From<String> for Genre {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Genre::Other)
    }
}

/// One entry in the library, exactly as written to `library.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: Genre,
    pub read: bool,
    pub rating: Option<f32>,
    pub notes: String,
    pub added_date: NaiveDateTime,
    pub progress: u8,
    pub cover_image: Option<String>,
}

/// A library record as found on disk.
///
/// Identity fields are required; everything else may be missing in files
/// written by earlier versions and is filled in by [`StoredBook::migrate`].
#[derive(Debug, Clone, Deserialize)]
pub struct StoredBook {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub read: Option<bool>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub added_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl StoredBook {
    /// Applies defaults and restores the record invariants.
    pub fn migrate(self, now: NaiveDateTime) -> Book {
        let progress = utils::clamp_progress(self.progress.unwrap_or(0));
        let read = self.read.unwrap_or(false) || progress == 100;
        Book {
            id: self.id,
            title: self.title,
            author: self.author,
            year: self.year,
            genre: self.genre.unwrap_or_default(),
            read,
            rating: if read { self.rating } else { None },
            notes: self.notes.unwrap_or_default(),
            added_date: self.added_date.unwrap_or(now),
            progress,
            cover_image: self.cover_image,
        }
    }
}

/// Caller input for [`crate::management::LibraryStore::add`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: Genre,
    pub read: bool,
    pub rating: Option<f32>,
    pub notes: String,
    pub cover_image: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32, genre: Genre) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre,
            ..Default::default()
        }
    }

    pub fn validate(&self, current_year: i32) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if !utils::valid_years(current_year).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange {
                year: self.year,
                max: current_year,
            });
        }
        if let Some(rating) = self.rating {
            if self.read && !(0.0..=5.0).contains(&rating) {
                return Err(ValidationError::RatingOutOfRange(rating));
            }
        }
        Ok(())
    }

    pub fn into_book(self, id: u32, added_date: NaiveDateTime) -> Book {
        Book {
            id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            year: self.year,
            genre: self.genre,
            read: self.read,
            rating: if self.read { self.rating } else { None },
            notes: self.notes,
            added_date,
            progress: 0,
            cover_image: self.cover_image,
        }
    }
}

/// Reading streak and monthly goal state, exactly as written to `user_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgress {
    pub reading_streak: u32,
    pub last_reading_date: Option<NaiveDate>,
    pub monthly_goal: u32,
    pub books_read_this_month: u32,
    pub month: u32,
    pub year: Option<i32>,
}

impl UserProgress {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            reading_streak: 0,
            last_reading_date: None,
            monthly_goal: 0,
            books_read_this_month: 0,
            month: today.month(),
            year: Some(today.year()),
        }
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self::fresh(Local::now().date_naive())
    }
}

/// Read-only view of [`UserProgress`] handed to reporting code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub streak: u32,
    pub last_date: Option<NaiveDate>,
    pub goal: u32,
    pub read_this_month: u32,
    pub month: u32,
}

impl ProgressSnapshot {
    /// Share of the monthly goal reached so far, `None` while no goal is set.
    pub fn goal_ratio(&self) -> Option<f64> {
        (self.goal > 0).then(|| self.read_this_month as f64 / self.goal as f64)
    }
}

impl From<&UserProgress> for ProgressSnapshot {
    fn from(p: &UserProgress) -> Self {
        Self {
            streak: p.reading_streak,
            last_date: p.last_reading_date,
            goal: p.monthly_goal,
            read_this_month: p.books_read_this_month,
            month: p.month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub icon: &'static str,
    pub books: usize,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub status: String,
    pub rating: String,
}

impl From<&Book> for BookTableRow {
    fn from(b: &Book) -> Self {
        Self {
            id: b.id,
            title: b.title.clone(),
            author: b.author.clone(),
            year: b.year,
            genre: b.genre.to_string(),
            status: if b.read {
                "read".to_string()
            } else {
                format!("{}%", b.progress)
            },
            rating: b.rating.map(|r| format!("{:.1}/5", r)).unwrap_or_default(),
        }
    }
}
