// livepost-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use livepost_core::config::{AppConfig, RedditConfig, StorageConfig, TwitchConfig, DEFAULT_DB_PATH};
use livepost_core::lock::RunLock;
use livepost_core::repositories::sqlite::{SqliteRunStateRepository, SqliteStreamHistoryRepository};
use livepost_core::repositories::{RunStateRepository, StreamHistoryRepository};
use livepost_core::services::runner::{open_store, run_once};

/// Command-line arguments. Every option can also come from the environment
/// (or a `.env` file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(name = "livepost")]
#[command(author, version, about = "Announce a Twitch channel's live streams on a subreddit")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Twitch application client id
    #[arg(long, env = "TWITCH_CLIENT_ID", hide_env_values = true)]
    twitch_client_id: Option<String>,

    /// Twitch application client secret
    #[arg(long, env = "TWITCH_CLIENT_SECRET", hide_env_values = true)]
    twitch_client_secret: Option<String>,

    /// Login name of the channel to watch
    #[arg(long, env = "TWITCH_CHANNEL")]
    channel: Option<String>,

    /// Subreddit to post announcements to (without the r/)
    #[arg(long, env = "REDDIT_SUBREDDIT")]
    subreddit: Option<String>,

    /// Reddit script-app client id
    #[arg(long, env = "REDDIT_CLIENT_ID", hide_env_values = true)]
    reddit_client_id: Option<String>,

    /// Reddit script-app client secret
    #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    reddit_client_secret: Option<String>,

    /// Reddit account the posts are made from
    #[arg(long, env = "REDDIT_USERNAME")]
    reddit_username: Option<String>,

    #[arg(long, env = "REDDIT_PASSWORD", hide_env_values = true)]
    reddit_password: Option<String>,

    /// User-Agent for Reddit requests
    #[arg(long, env = "REDDIT_USER_AGENT")]
    user_agent: Option<String>,

    /// Path to the SQLite state file
    #[arg(long, env = "LIVEPOST_DB", default_value = DEFAULT_DB_PATH)]
    db_path: String,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Check the channel once and update the subreddit (default)
    Run,
    /// Show the stored run state
    Status,
    /// List announced sessions, newest first
    History {
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Forget the stored start time and post id
    Reset,
}

impl Args {
    fn to_config(&self) -> AppConfig {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        AppConfig {
            twitch: TwitchConfig {
                client_id: value(&self.twitch_client_id),
                client_secret: value(&self.twitch_client_secret),
                channel: value(&self.channel),
            },
            reddit: RedditConfig {
                client_id: value(&self.reddit_client_id),
                client_secret: value(&self.reddit_client_secret),
                username: value(&self.reddit_username),
                password: value(&self.reddit_password),
                subreddit: value(&self.subreddit),
                user_agent: self.user_agent.clone(),
            },
            storage: StorageConfig { db_path: self.db_path.clone() },
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("livepost=info"));
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; values may come from the real environment.
    dotenv::dotenv().ok();
    init_tracing()?;

    let args = Args::parse();
    let config = args.to_config();

    match args.command.clone().unwrap_or(Command::Run) {
        Command::Run => run(&config).await,
        Command::Status => show_status(&config).await,
        Command::History { limit } => show_history(&config, limit).await,
        Command::Reset => reset(&config).await,
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    info!("livepost starting; channel={}, subreddit={}", config.twitch.channel, config.reddit.subreddit);
    let outcome = run_once(config).await?;
    if outcome.is_noop() {
        info!("Nothing to do: {}", outcome);
    }
    Ok(())
}

async fn show_status(config: &AppConfig) -> anyhow::Result<()> {
    let db = open_store(config).await?;
    let state = SqliteRunStateRepository::new(db.pool().clone()).load().await?;
    println!("last_start: {}", state.last_start.as_deref().unwrap_or("-"));
    println!("last_post:  {}", state.last_post.as_deref().unwrap_or("-"));
    Ok(())
}

async fn show_history(config: &AppConfig, limit: i64) -> anyhow::Result<()> {
    let db = open_store(config).await?;
    let records = SqliteStreamHistoryRepository::new(db.pool().clone())
        .list_recent(limit)
        .await?;
    if records.is_empty() {
        println!("No sessions recorded.");
    }
    for r in records {
        println!("{}  game={}  {}", r.started_at, r.game_id, r.title);
    }
    Ok(())
}

async fn reset(config: &AppConfig) -> anyhow::Result<()> {
    let _lock = RunLock::acquire(config.storage.lock_path())?;
    let db = open_store(config).await?;
    let repo = SqliteRunStateRepository::new(db.pool().clone());
    let previous = repo.load().await?;
    repo.clear().await?;
    info!(
        "Cleared run state (last_start={:?}, last_post={:?})",
        previous.last_start, previous.last_post
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_config() {
        let args = Args::parse_from([
            "livepost",
            "--twitch-client-id", "cid",
            "--twitch-client-secret", "csecret",
            "--channel", "somechannel",
            "--subreddit", "somesub",
            "--reddit-client-id", "rid",
            "--reddit-client-secret", "rsecret",
            "--reddit-username", "bot",
            "--reddit-password", "hunter2",
            "--db-path", "state/test.db",
            "history",
            "--limit", "5",
        ]);
        let config = args.to_config();
        assert_eq!(config.twitch.channel, "somechannel");
        assert_eq!(config.reddit.subreddit, "somesub");
        assert_eq!(config.storage.db_path, "state/test.db");
        assert!(config.validate().is_ok());
        assert!(matches!(args.command, Some(Command::History { limit: 5 })));
    }

    #[test]
    fn subcommand_defaults_to_run() {
        let args = Args::parse_from(["livepost", "--channel", "somechannel"]);
        assert!(args.command.is_none());
    }
}
