use crate::models::{Goals, WeeklyActivityData, WeeklySummary};
use crate::progress::{compute_progress, InvalidGoalError};

pub fn summarize_week(
    week: &WeeklyActivityData,
    goals: &Goals,
) -> Result<WeeklySummary, InvalidGoalError> {
    let best_day = week
        .daily_steps
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (index, steps)| match best {
            Some((_, top)) if top >= *steps => best,
            _ => Some((index, *steps)),
        })
        .map(|(index, _)| index);

    Ok(WeeklySummary {
        total_steps: week.total_steps,
        total_calories: week.total_calories,
        avg_active_minutes: week.avg_active_minutes,
        best_day,
        days_step_goal_met: days_goal_met(&week.daily_steps, goals.steps)?,
        days_calorie_goal_met: days_goal_met(&week.daily_calories, goals.calories)?,
        days_active_goal_met: days_goal_met(
            &week.daily_active_minutes,
            goals.active_minutes,
        )?,
    })
}

/// Days that reached the goal outright. A day rounding up to 100% does not count.
fn days_goal_met(values: &[u32], goal: u32) -> Result<usize, InvalidGoalError> {
    compute_progress(0.0, f64::from(goal))?;
    Ok(values.iter().filter(|value| **value >= goal).count())
}
