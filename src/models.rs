use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub steps: u32,
    pub calories: u32,
    pub active_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    pub date: DateTime<Utc>,
    pub steps: u32,
    pub calories: u32,
    /// Kilometres.
    pub distance: f64,
    pub active_minutes: u32,
    pub goals: Goals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivityData {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub daily_steps: Vec<u32>,
    pub daily_calories: Vec<u32>,
    pub daily_active_minutes: Vec<u32>,
    pub total_steps: u64,
    pub total_calories: u64,
    pub avg_active_minutes: u32,
}

/// One day's counters as read from an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotals {
    pub steps: u32,
    pub calories: u32,
    pub active_minutes: u32,
}

impl WeeklyActivityData {
    /// Builds a week from per-day counters, deriving the totals and the
    /// whole-minute average.
    pub fn from_days(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        days: &[DayTotals],
    ) -> Self {
        let total_steps = days.iter().map(|d| u64::from(d.steps)).sum();
        let total_calories = days.iter().map(|d| u64::from(d.calories)).sum();
        let total_minutes: u64 = days.iter().map(|d| u64::from(d.active_minutes)).sum();
        let avg_active_minutes = if days.is_empty() {
            0
        } else {
            (total_minutes / days.len() as u64) as u32
        };

        Self {
            start_date,
            end_date,
            daily_steps: days.iter().map(|d| d.steps).collect(),
            daily_calories: days.iter().map(|d| d.calories).collect(),
            daily_active_minutes: days.iter().map(|d| d.active_minutes).collect(),
            total_steps,
            total_calories,
            avg_active_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub goals: Goals,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressResult {
    pub fraction: f64,
    pub percentage: u8,
}

impl ProgressResult {
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Steps,
    Calories,
    ActiveMinutes,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Steps, Metric::Calories, Metric::ActiveMinutes];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Steps => "Steps",
            Metric::Calories => "Calories",
            Metric::ActiveMinutes => "Active Minutes",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Calories => "kcal",
            Metric::ActiveMinutes => "min",
        }
    }

    pub fn goal(self, goals: &Goals) -> u32 {
        match self {
            Metric::Steps => goals.steps,
            Metric::Calories => goals.calories,
            Metric::ActiveMinutes => goals.active_minutes,
        }
    }

    pub fn current(self, activity: &ActivityData) -> u32 {
        match self {
            Metric::Steps => activity.steps,
            Metric::Calories => activity.calories,
            Metric::ActiveMinutes => activity.active_minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub metric: Metric,
    pub current: u32,
    pub goal: u32,
    pub progress: ProgressResult,
}

impl GoalProgress {
    /// The goal is reached, not just rounded up to 100%.
    pub fn is_met(&self) -> bool {
        self.current >= self.goal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingGeometry {
    pub circumference: f64,
    pub dash_offset: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub total_steps: u64,
    pub total_calories: u64,
    pub avg_active_minutes: u32,
    pub best_day: Option<usize>,
    pub days_step_goal_met: usize,
    pub days_calorie_goal_met: usize,
    pub days_active_goal_met: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn week_totals_follow_daily_counters() {
        let start = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 2, 7, 0, 0, 0).unwrap();
        let days = [
            DayTotals {
                steps: 5231,
                calories: 1560,
                active_minutes: 25,
            },
            DayTotals {
                steps: 7842,
                calories: 1875,
                active_minutes: 42,
            },
            DayTotals {
                steps: 10327,
                calories: 2340,
                active_minutes: 65,
            },
        ];

        let week = WeeklyActivityData::from_days(start, end, &days);
        assert_eq!(week.total_steps, 23400);
        assert_eq!(week.total_calories, 5775);
        assert_eq!(week.avg_active_minutes, 44);
        assert_eq!(week.daily_steps, vec![5231, 7842, 10327]);
    }

    #[test]
    fn empty_week_has_zero_average() {
        let now = Utc::now();
        let week = WeeklyActivityData::from_days(now, now, &[]);
        assert_eq!(week.avg_active_minutes, 0);
        assert_eq!(week.total_steps, 0);
    }

    #[test]
    fn profile_serializes_in_camel_case() {
        let profile = UserProfile {
            id: "user-1".to_string(),
            name: "Alex Johnson".to_string(),
            age: 32,
            weight: 74.5,
            height: 178.0,
            goals: Goals {
                steps: 10000,
                calories: 2500,
                active_minutes: 30,
            },
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["goals"]["activeMinutes"], 30);
    }
}
