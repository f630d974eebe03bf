use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::config::check_setup;
use crate::directory::{JsonDirectory, UserDirectory};
use crate::error::BackendError;
use crate::matching::match_profiles;
use crate::messaging::{default_board_path, load_board, save_board};
use crate::models::{SkillCategory, UserProfile};
use crate::search::{filter_candidates, parse_filter_query};

/// Outer bound on one directory load. Best-effort only: on expiry the search
/// state clears and the underlying read is dropped.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "skillswap")]
#[command(version = "0.1.0")]
#[command(about = "Find skill-swap partners and message them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the directory for skill-swap candidates
    Search {
        /// Id of the requesting user (always excluded from results)
        #[arg(long = "as", value_name = "USER_ID")]
        user: String,
        /// Filter query, e.g. 'guitar category:Music location:Berlin'
        #[arg(long, default_value = "")]
        filter: String,
        /// Path to the profile directory file
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Show reciprocal skill matches between two users
    Matches {
        #[arg(long = "as", value_name = "USER_ID")]
        user: String,
        /// Id of the candidate to compare against
        #[arg(long, value_name = "USER_ID")]
        with: String,
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Show statistics about the profile directory
    Stats {
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Start (or find) a conversation with another user
    Connect {
        #[arg(long = "as", value_name = "USER_ID")]
        user: String,
        #[arg(long, value_name = "USER_ID")]
        with: String,
        /// Path to the message store file
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Send a message in an existing conversation
    Send {
        #[arg(long, value_name = "CONVERSATION_ID")]
        conversation: String,
        #[arg(long, value_name = "USER_ID")]
        from: String,
        #[arg(long, value_name = "USER_ID")]
        to: String,
        #[arg(long)]
        store: Option<PathBuf>,
        content: String,
    },
    /// List conversations, newest first
    Inbox {
        #[arg(long = "as", value_name = "USER_ID")]
        user: String,
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Verify that backend credentials are configured
    SetupCheck,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { user, filter, directory }) => {
            run_search(&user, &filter, directory).await?;
        }
        Some(Commands::Matches { user, with, directory }) => {
            run_matches(&user, &with, directory).await?;
        }
        Some(Commands::Stats { directory }) => {
            run_stats(directory)?;
        }
        Some(Commands::Connect { user, with, store }) => {
            run_connect(&user, &with, store).await?;
        }
        Some(Commands::Send { conversation, from, to, store, content }) => {
            run_send(&conversation, &from, &to, &content, store).await?;
        }
        Some(Commands::Inbox { user, store }) => {
            run_inbox(&user, store).await?;
        }
        Some(Commands::SetupCheck) => {
            run_setup_check();
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_directory(path: Option<PathBuf>) -> Result<JsonDirectory> {
    match path {
        Some(path) => Ok(JsonDirectory::new(path)),
        None => JsonDirectory::open_default(),
    }
}

fn board_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => default_board_path(),
    }
}

/// Render a backend failure without aborting: permission problems get their
/// own user-visible state, everything else is logged and swallowed.
fn report_backend_error(err: &BackendError) {
    if err.is_permission_denied() {
        println!("Backend permissions are not configured.");
        println!("Run `skillswap setup-check` and review your credentials.");
    } else {
        tracing::warn!(error = %err, "backend call failed");
        println!("The directory is unavailable right now; try again later.");
    }
}

async fn run_search(user: &str, filter: &str, directory: Option<PathBuf>) -> Result<()> {
    let directory = open_directory(directory)?;
    let filters = parse_filter_query(filter)?;

    let me = match directory.get(user).await {
        Ok(Some(profile)) => profile,
        Ok(None) => bail!("no profile found for '{user}'"),
        Err(err) => {
            report_backend_error(&err);
            return Ok(());
        }
    };

    let page = match tokio::time::timeout(SEARCH_TIMEOUT, directory.query()).await {
        Err(_) => {
            tracing::warn!("directory query exceeded {:?}", SEARCH_TIMEOUT);
            println!("Search timed out; try again.");
            return Ok(());
        }
        Ok(Err(err)) => {
            report_backend_error(&err);
            return Ok(());
        }
        Ok(Ok(page)) => page,
    };

    let results = filter_candidates(user, page, &filters);
    if results.is_empty() {
        println!("No users found matching your criteria");
        return Ok(());
    }

    println!("{} users found", results.len());
    for candidate in &results {
        print_candidate(&me, candidate);
    }

    Ok(())
}

fn print_candidate(me: &UserProfile, candidate: &UserProfile) {
    println!();
    println!("{} ({})", candidate.display_name, candidate.id);
    if !candidate.location.is_empty() {
        println!("  location: {}", candidate.location);
    }
    if candidate.rating > 0.0 {
        println!("  rating: {:.1} over {} swaps", candidate.rating, candidate.total_swaps);
    }

    if !candidate.skills_offered.is_empty() {
        let shown: Vec<&str> =
            candidate.skills_offered.iter().take(3).map(|s| s.name.as_str()).collect();
        let extra = candidate.skills_offered.len().saturating_sub(shown.len());
        if extra > 0 {
            println!("  can teach: {} (+{} more)", shown.join(", "), extra);
        } else {
            println!("  can teach: {}", shown.join(", "));
        }
    }

    let hints = match_profiles(me, candidate);
    if !hints.is_empty() {
        let plural = if hints.len() == 1 { "" } else { "s" };
        println!("  {} matching skill{} found", hints.len(), plural);
    }
}

async fn run_matches(user: &str, with: &str, directory: Option<PathBuf>) -> Result<()> {
    let directory = open_directory(directory)?;

    let me = directory
        .get(user)
        .await
        .context("Failed to load requesting profile")?
        .with_context(|| format!("no profile found for '{user}'"))?;
    let other = directory
        .get(with)
        .await
        .context("Failed to load candidate profile")?
        .with_context(|| format!("no profile found for '{with}'"))?;

    let hints = match_profiles(&me, &other);
    if hints.is_empty() {
        println!("No matching skills with {}", other.display_name);
        return Ok(());
    }

    let plural = if hints.len() == 1 { "" } else { "s" };
    println!("{} matching skill{} with {}", hints.len(), plural, other.display_name);
    for hint in &hints {
        println!("  {}  {} ({})", hint.direction, hint.skill.name, hint.skill.category);
    }

    Ok(())
}

fn run_stats(directory: Option<PathBuf>) -> Result<()> {
    let directory = open_directory(directory)?;
    let profiles = directory.load_profiles().context("Failed to load profile directory")?;

    let offered: usize = profiles.iter().map(|p| p.skills_offered.len()).sum();
    let wanted: usize = profiles.iter().map(|p| p.skills_wanted.len()).sum();

    println!("Skillswap Directory Statistics");
    println!("================================");
    println!("Profiles: {}", profiles.len());
    println!("  Skills offered: {}", offered);
    println!("  Skills wanted: {}", wanted);

    let mut categories: Vec<(SkillCategory, usize)> = SkillCategory::ALL
        .iter()
        .map(|&category| {
            let count = profiles
                .iter()
                .flat_map(|p| &p.skills_offered)
                .filter(|s| s.category == category)
                .count();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    if !categories.is_empty() {
        println!();
        println!("Offered by category:");
        for (category, count) in categories {
            println!("  {}: {}", category, count);
        }
    }

    println!();
    println!("Directory file: {}", directory.path().display());

    Ok(())
}

async fn run_connect(user: &str, with: &str, store: Option<PathBuf>) -> Result<()> {
    let path = board_path(store)?;
    let board = load_board(&path).context("Failed to load message store")?;

    let id = board.ensure_conversation(user, with).await?;
    save_board(&path, &board)?;

    println!("Conversation: {}", id);
    Ok(())
}

async fn run_send(
    conversation: &str,
    from: &str,
    to: &str,
    content: &str,
    store: Option<PathBuf>,
) -> Result<()> {
    let path = board_path(store)?;
    let board = load_board(&path).context("Failed to load message store")?;

    let message = board
        .send_message(conversation, from, to, content)
        .await
        .context("Failed to send message")?;
    save_board(&path, &board)?;

    println!("Message sent ({})", message.id);
    Ok(())
}

async fn run_inbox(user: &str, store: Option<PathBuf>) -> Result<()> {
    let path = board_path(store)?;
    let board = match load_board(&path) {
        Ok(board) => board,
        Err(err) => {
            report_backend_error(&err);
            return Ok(());
        }
    };

    let conversations = board.conversations_for(user).await;
    if conversations.is_empty() {
        println!("No conversations yet");
        return Ok(());
    }

    for conversation in &conversations {
        let counterpart = conversation.counterpart(user).unwrap_or("(unknown)");
        let unread = conversation.unread_count.get(user).copied().unwrap_or(0);
        println!("{}  with {}  ({} unread)", conversation.id, counterpart, unread);
        if let Some(last) = &conversation.last_message {
            println!(
                "  {}  {}: {}",
                last.timestamp.format("%Y-%m-%d %H:%M"),
                last.sender_id,
                preview(&last.content)
            );
        }
    }

    Ok(())
}

fn preview(content: &str) -> String {
    const MAX: usize = 60;
    if content.chars().count() <= MAX {
        content.to_string()
    } else {
        let cut: String = content.chars().take(MAX).collect();
        format!("{cut}…")
    }
}

fn run_setup_check() {
    println!("Skillswap Backend Configuration Check");
    println!("=====================================");

    let statuses = check_setup();
    for status in &statuses {
        let mark = if status.configured { "✅" } else { "❌" };
        let label = if status.configured { "Configured" } else { "NOT CONFIGURED" };
        println!("{} {}: {}", mark, status.name, label);
    }

    println!();
    if statuses.iter().all(|s| s.configured) {
        println!("All backend environment variables are configured.");
    } else {
        println!("Some environment variables need to be configured.");
        println!("Update your .env file with values from the backend console.");
    }
}
