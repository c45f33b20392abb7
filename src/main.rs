use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use libquest::{
    cli,
    config::{self, StoragePaths},
    logging,
    management::LibraryManager,
    types::{Genre, NewBook},
    utils, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new book to the library
    Add(AddOptions),

    /// List the books in your library
    List(ListOptions),

    /// Set the reading progress of a book in percent
    Progress(ProgressOptions),

    /// Remove a book from the library
    Remove(RemoveOptions),

    /// Show earned achievements
    Achievements,

    /// Show your reading streak
    Streak,

    /// Show or set the monthly reading goal
    Goal(GoalOptions),

    /// Get a book recommendation for a genre
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Title of the book
    #[clap(long)]
    pub title: String,

    /// Author of the book
    #[clap(long)]
    pub author: String,

    /// Publication year
    #[clap(long)]
    pub year: i32,

    /// Genre, e.g. Fiction, Non-Fiction, Sci-Fi
    #[clap(long, default_value = "Other", value_parser = utils::parse_genre)]
    pub genre: Genre,

    /// Mark the book as already read
    #[clap(long)]
    pub read: bool,

    /// Rating from 0.0 to 5.0, only kept for read books
    #[clap(long, requires = "read")]
    pub rating: Option<f32>,

    /// Free-form notes
    #[clap(long, default_value = "")]
    pub notes: String,

    /// Path to a cover image
    #[clap(long)]
    pub cover: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show books not read yet
    #[clap(long)]
    pub unread: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ProgressOptions {
    /// Id of the book
    pub id: u32,

    /// Progress in percent, clamped to 0..=100
    #[clap(allow_negative_numbers = true)]
    pub progress: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveOptions {
    /// Id of the book
    pub id: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct GoalOptions {
    /// New number of books per month, 0 disables the goal
    #[clap(long, allow_negative_numbers = true)]
    pub set: Option<i64>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    #[clap(value_parser = utils::parse_genre)]
    genre: Genre,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    if let Err(e) = logging::init_logging(&config::log_file(), &config::log_filter()) {
        warning!("Logging disabled. Err: {}", e);
    }

    let cli = Cli::parse();
    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut manager = LibraryManager::load(&StoragePaths::from_env()).await;

    match cli.command {
        Command::Add(opt) => {
            let book = NewBook {
                title: opt.title,
                author: opt.author,
                year: opt.year,
                genre: opt.genre,
                read: opt.read,
                rating: opt.rating,
                notes: opt.notes,
                cover_image: None,
            };
            cli::add_book(&mut manager, book, opt.cover).await
        }
        Command::List(opt) => cli::list_books(&manager, opt.unread),
        Command::Progress(opt) => cli::update_progress(&mut manager, opt.id, opt.progress).await,
        Command::Remove(opt) => cli::remove_book(&mut manager, opt.id).await,
        Command::Achievements => cli::achievements(&manager),
        Command::Streak => cli::streak(&manager),
        Command::Goal(opt) => cli::goal(&mut manager, opt.set).await,
        Command::Recommend(opt) => cli::recommend(opt.genre),
        Command::Completions(_) => {}
    }
}
