use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{StreakOptions, TrackedTeam};
use crate::match_id::generate_match_id;
use crate::models::{Match, MatchStatus, Winner};

/// Outcome of a finished match from the tracked team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HomeOrAway {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "A")]
    Away,
}

/// A finished match flattened to the tracked team's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDisplay {
    pub id: i64,
    pub opponent: String,
    pub opponent_tla: String,
    pub home_or_away: HomeOrAway,
    pub result: MatchResult,
    pub score_home: u32,
    pub score_away: u32,
    pub date: DateTime<Utc>,
    pub competition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextMatch {
    pub opponent: String,
    pub opponent_tla: String,
    pub date: DateTime<Utc>,
    pub home_or_away: HomeOrAway,
    /// Identifier votes on this fixture are stored under.
    pub match_id: String,
}

/// Full W/D/L record since a start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EraRecord {
    pub matches: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub start_date: NaiveDate,
}

/// Everything the streak page shows. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub streak: usize,
    /// The unbeaten run, most recent first.
    pub matches: Vec<MatchDisplay>,
    pub wins: usize,
    pub draws: usize,
    pub next_match: Option<NextMatch>,
    pub era: Option<EraRecord>,
    pub last_updated: DateTime<Utc>,
}

impl StreakData {
    /// What gets shown when the upstream could not be reached.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            streak: 0,
            matches: Vec::new(),
            wins: 0,
            draws: 0,
            next_match: None,
            era: None,
            last_updated: now,
        }
    }
}

fn is_home(team: &TrackedTeam, m: &Match) -> bool {
    m.home_team.id == Some(team.id)
}

fn home_or_away(team: &TrackedTeam, m: &Match) -> HomeOrAway {
    if is_home(team, m) {
        HomeOrAway::Home
    } else {
        HomeOrAway::Away
    }
}

/// Result of `m` for the tracked team.
///
/// A finished match is assumed to carry a winner; a missing one falls
/// through to the away-win branch like any non-home, non-draw winner.
pub fn match_result(team: &TrackedTeam, m: &Match) -> MatchResult {
    let home = is_home(team, m);
    match m.score.winner {
        Some(Winner::Draw) => MatchResult::Draw,
        Some(Winner::HomeTeam) if home => MatchResult::Win,
        Some(Winner::HomeTeam) => MatchResult::Loss,
        _ if home => MatchResult::Loss,
        _ => MatchResult::Win,
    }
}

pub fn to_match_display(team: &TrackedTeam, m: &Match) -> MatchDisplay {
    let opponent = if is_home(team, m) {
        &m.away_team
    } else {
        &m.home_team
    };

    MatchDisplay {
        id: m.id,
        opponent: opponent.short_name.clone(),
        opponent_tla: opponent.tla.clone(),
        home_or_away: home_or_away(team, m),
        result: match_result(team, m),
        score_home: m.score.full_time.home.unwrap_or(0),
        score_away: m.score.full_time.away.unwrap_or(0),
        date: m.utc_date,
        competition: m.competition.name.clone(),
    }
}

/// Longest run of most recent matches without a loss, newest first.
pub fn calculate_streak(matches: &[MatchDisplay]) -> Vec<MatchDisplay> {
    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .take_while(|m| m.result != MatchResult::Loss)
        .collect()
}

/// Earliest scheduled or timed fixture.
pub fn next_match(team: &TrackedTeam, matches: &[Match]) -> Option<NextMatch> {
    let next = matches
        .iter()
        .filter(|m| m.status.is_upcoming())
        .min_by_key(|m| m.utc_date)?;

    let opponent = if is_home(team, next) {
        &next.away_team
    } else {
        &next.home_team
    };

    Some(NextMatch {
        opponent: opponent.short_name.clone(),
        opponent_tla: opponent.tla.clone(),
        date: next.utc_date,
        home_or_away: home_or_away(team, next),
        match_id: generate_match_id(&team.code, &opponent.tla, &next.utc_date),
    })
}

pub fn era_record(finished: &[MatchDisplay], start_date: NaiveDate) -> EraRecord {
    let mut record = EraRecord {
        matches: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        start_date,
    };

    for m in finished.iter().filter(|m| m.date.date_naive() >= start_date) {
        record.matches += 1;
        match m.result {
            MatchResult::Win => record.wins += 1,
            MatchResult::Draw => record.draws += 1,
            MatchResult::Loss => record.losses += 1,
        }
    }

    record
}

pub fn derive_streak(options: &StreakOptions, matches: &[Match]) -> StreakData {
    derive_streak_at(options, matches, Utc::now())
}

pub fn derive_streak_at(
    options: &StreakOptions,
    matches: &[Match],
    now: DateTime<Utc>,
) -> StreakData {
    let finished: Vec<MatchDisplay> = matches
        .iter()
        .filter(|m| m.status == MatchStatus::Finished)
        .map(|m| to_match_display(&options.team, m))
        .collect();

    let run = calculate_streak(&finished);
    let wins = run.iter().filter(|m| m.result == MatchResult::Win).count();

    StreakData {
        streak: run.len(),
        wins,
        draws: run.len() - wins,
        matches: run,
        next_match: next_match(&options.team, matches),
        era: options.era_start.map(|start| era_record(&finished, start)),
        last_updated: now,
    }
}
