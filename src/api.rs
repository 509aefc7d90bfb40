use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Duration as DayDuration, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::models::{ActivityData, DayTotals, Goals, UserProfile, WeeklyActivityData};
use crate::profile::{self, ProfileError};

const DAILY_DELAY: Duration = Duration::from_millis(800);
const WEEKLY_DELAY: Duration = Duration::from_millis(1000);
const PROFILE_DELAY: Duration = Duration::from_millis(600);
const UPDATE_DELAY: Duration = Duration::from_millis(1200);

const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Simulated,
    Disabled,
}

fn default_goals() -> Goals {
    Goals {
        steps: 10000,
        calories: 2500,
        active_minutes: 30,
    }
}

pub fn mock_daily_activity() -> ActivityData {
    ActivityData {
        date: Utc::now(),
        steps: 7842,
        calories: 1875,
        distance: 5.3,
        active_minutes: 42,
        goals: default_goals(),
    }
}

pub fn mock_weekly_activity() -> WeeklyActivityData {
    let end_date = Utc::now();
    WeeklyActivityData {
        start_date: end_date - DayDuration::days(6),
        end_date,
        daily_steps: vec![5231, 7842, 10327, 4521, 8732, 6543, 7842],
        daily_calories: vec![1560, 1875, 2340, 1430, 2050, 1720, 1875],
        daily_active_minutes: vec![25, 42, 65, 20, 55, 35, 42],
        total_steps: 51038,
        total_calories: 12850,
        avg_active_minutes: 40,
    }
}

pub fn mock_user_profile() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: "Alex Johnson".to_string(),
        age: 32,
        weight: 74.5,
        height: 178.0,
        goals: default_goals(),
    }
}

/// In-memory stand-in for the fitness backend.
pub struct MockFitnessApi {
    latency: Latency,
    profile: RwLock<UserProfile>,
}

impl MockFitnessApi {
    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            profile: RwLock::new(mock_user_profile()),
        }
    }

    async fn delay(&self, duration: Duration) {
        if self.latency == Latency::Simulated {
            tokio::time::sleep(duration).await;
        }
    }

    pub async fn fetch_daily_activity(&self) -> ActivityData {
        self.delay(DAILY_DELAY).await;
        tracing::debug!("fetched daily activity");
        mock_daily_activity()
    }

    pub async fn fetch_weekly_activity(&self) -> WeeklyActivityData {
        self.delay(WEEKLY_DELAY).await;
        tracing::debug!("fetched weekly activity");
        mock_weekly_activity()
    }

    pub async fn fetch_user_profile(&self) -> UserProfile {
        self.delay(PROFILE_DELAY).await;
        let profile = self.profile.read().await.clone();
        tracing::debug!(id = %profile.id, "fetched user profile");
        profile
    }

    pub async fn update_user_profile(
        &self,
        profile: UserProfile,
    ) -> Result<UserProfile, ProfileError> {
        self.delay(UPDATE_DELAY).await;
        profile::validate(&profile)?;

        let mut stored = self.profile.write().await;
        *stored = profile.clone();
        tracing::info!(id = %profile.id, name = %profile.name, "profile updated");
        Ok(profile)
    }
}

/// Reads `date,steps,calories,active_minutes` rows into a week. Rows must be
/// consecutive days, one per date, spanning at most seven days.
pub fn import_weekly_csv(csv_path: &Path) -> anyhow::Result<WeeklyActivityData> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        date: NaiveDate,
        steps: u32,
        calories: u32,
        active_minutes: u32,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut rows = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result.with_context(|| format!("malformed row in {}", csv_path.display()))?;
        rows.push(row);
    }

    rows.sort_by_key(|row| row.date);
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => anyhow::bail!("{} contains no activity rows", csv_path.display()),
    };

    for pair in rows.windows(2) {
        match (pair[1].date - pair[0].date).num_days() {
            0 => anyhow::bail!("{} has more than one row for {}", csv_path.display(), pair[0].date),
            1 => {}
            _ => anyhow::bail!(
                "{} is missing days between {} and {}",
                csv_path.display(),
                pair[0].date,
                pair[1].date
            ),
        }
    }
    if rows.len() > DAYS_PER_WEEK {
        anyhow::bail!(
            "{} spans {} days, at most {} are allowed",
            csv_path.display(),
            rows.len(),
            DAYS_PER_WEEK
        );
    }

    let days: Vec<DayTotals> = rows
        .iter()
        .map(|row| DayTotals {
            steps: row.steps,
            calories: row.calories,
            active_minutes: row.active_minutes,
        })
        .collect();

    tracing::info!(days = days.len(), path = %csv_path.display(), "imported weekly activity");
    Ok(WeeklyActivityData::from_days(
        start_of_day(first),
        start_of_day(last),
        &days,
    ))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
