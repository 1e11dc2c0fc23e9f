use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use football::{
    BallotClient, ClientConfig, FootballDataClient, StreakOptions, TrackedTeam,
    generate_match_id,
    markers::{FileMarkerStore, VoteMarkerStore},
    streak::{MatchResult, StreakData, derive_streak},
};
use storage::dto::VoteCounts;
use storage::models::VoteChoice;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "unbeaten")]
#[command(about = "Unbeaten streak tracker and match vote client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "TEAM_ID", default_value_t = football::config::DEFAULT_TEAM_ID)]
    team_id: i64,

    #[arg(long, env = "TEAM_CODE", default_value = football::config::DEFAULT_TEAM_CODE)]
    team_code: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch recent matches and print the current unbeaten run
    Streak {
        #[arg(long, env = "FOOTBALL_DATA_API_KEY", default_value = "")]
        api_key: String,

        #[arg(long, env = "FOOTBALL_DATA_BASE_URL", default_value = football::config::DEFAULT_BASE_URL)]
        base_url: String,

        #[arg(long, env = "MATCH_LIMIT", default_value_t = football::config::DEFAULT_MATCH_LIMIT)]
        limit: u32,

        /// Keep a full W/D/L record from this date (YYYY-MM-DD)
        #[arg(long, env = "ERA_START_DATE")]
        era_start: Option<NaiveDate>,
    },
    /// Vote on a match through the web server
    Vote {
        #[arg(long)]
        match_id: String,

        #[arg(long, value_enum)]
        choice: Choice,

        #[arg(long, env = "UNBEATEN_SERVER_URL", default_value = "http://localhost:8080")]
        server: String,

        #[arg(long, env = "UNBEATEN_MARKERS", default_value = ".unbeaten-votes.json")]
        markers: PathBuf,

        /// Vote even if this client already voted on the match
        #[arg(long)]
        force: bool,
    },
    /// Print the vote identifier of a fixture
    MatchId {
        #[arg(long)]
        opponent: String,

        /// Kickoff as RFC 3339, e.g. 2025-03-09T16:30:00Z
        #[arg(long)]
        date: DateTime<Utc>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Choice {
    Yes,
    No,
}

impl From<Choice> for VoteChoice {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Yes => VoteChoice::Yes,
            Choice::No => VoteChoice::No,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("unbeaten={},football={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let team = TrackedTeam {
        id: cli.team_id,
        code: cli.team_code.clone(),
    };

    match cli.command {
        Commands::Streak {
            api_key,
            base_url,
            limit,
            era_start,
        } => {
            let config = ClientConfig {
                base_url,
                api_key,
                match_limit: limit,
                ..ClientConfig::default()
            };
            handle_streak(config, StreakOptions { team, era_start }).await?;
        }
        Commands::Vote {
            match_id,
            choice,
            server,
            markers,
            force,
        } => {
            handle_vote(&match_id, choice.into(), &server, markers, force).await?;
        }
        Commands::MatchId { opponent, date } => {
            println!("{}", generate_match_id(&team.code, &opponent, &date));
        }
    }

    Ok(())
}

async fn handle_streak(
    config: ClientConfig,
    options: StreakOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = FootballDataClient::new(config, &options.team)?;

    let data = match client.fetch_team_matches().await {
        Ok(matches) => derive_streak(&options, &matches),
        Err(e) => {
            tracing::warn!("Could not fetch matches: {}", e);
            StreakData::empty(Utc::now())
        }
    };

    print_streak(&data);
    Ok(())
}

fn print_streak(data: &StreakData) {
    println!("UNBEATEN STREAK: {} matches", data.streak);
    println!("  {} wins, {} draws, 0 losses", data.wins, data.draws);

    for m in &data.matches {
        let letter = match m.result {
            MatchResult::Win => "W",
            MatchResult::Draw => "D",
            MatchResult::Loss => "L",
        };
        println!(
            "  {} {} {}-{} {:<16} {}",
            letter,
            m.date.format("%d %b"),
            m.score_home,
            m.score_away,
            m.opponent,
            m.competition
        );
    }

    if let Some(era) = &data.era {
        println!(
            "Since {}: P{} W{} D{} L{}",
            era.start_date, era.matches, era.wins, era.draws, era.losses
        );
    }

    match &data.next_match {
        Some(next) => println!(
            "Next: {} ({:?}) on {} [{}]",
            next.opponent,
            next.home_or_away,
            next.date.format("%a %d %b %H:%M UTC"),
            next.match_id
        ),
        None => println!("Next: no fixture scheduled"),
    }
}

async fn handle_vote(
    match_id: &str,
    choice: VoteChoice,
    server: &str,
    markers: PathBuf,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut markers = FileMarkerStore::new(markers);
    let client = BallotClient::new(server)?;

    if let Some(previous) = markers.recorded_vote(match_id)? {
        if !force {
            println!("You voted: {} (use --force to vote again)", previous);
            match client.counts(match_id).await {
                Ok(counts) => print_counts(&counts),
                Err(e) => tracing::warn!("Could not fetch vote counts: {}", e),
            }
            return Ok(());
        }
    }

    let counts = client.cast(match_id, choice).await.map_err(|e| {
        tracing::error!("Vote failed: {}", e);
        format!("Couldn't register your vote. Try again. ({})", e)
    })?;

    markers.record_vote(match_id, choice)?;

    println!("You voted: {}", choice);
    print_counts(&counts);

    Ok(())
}

fn print_counts(counts: &VoteCounts) {
    println!(
        "YES {}% / NO {}% ({} fans have voted)",
        counts.yes_percent(),
        counts.no_percent(),
        counts.total()
    );
}
