use std::fmt::Write;

use crate::format::{date_heading, format_count, format_distance, weekday_labels};
use crate::models::{ActivityData, UserProfile, WeeklyActivityData};
use crate::progress::{self, InvalidGoalError};
use crate::summary;

pub fn build_report(
    daily: &ActivityData,
    weekly: &WeeklyActivityData,
    profile: &UserProfile,
) -> Result<String, InvalidGoalError> {
    let ring = progress::compute_progress(f64::from(daily.steps), f64::from(daily.goals.steps))?;
    let goals = progress::daily_goal_progress(daily)?;
    let week = summary::summarize_week(weekly, &profile.goals)?;
    let labels = weekday_labels(weekly.end_date);

    let mut output = String::new();

    let _ = writeln!(output, "# Fitness Report");
    let _ = writeln!(output, "Generated for {} on {}", profile.name, date_heading(daily.date));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Daily Activity");
    let _ = writeln!(
        output,
        "- Steps: {} ({}% of goal)",
        format_count(u64::from(daily.steps)),
        ring.percentage
    );
    let _ = writeln!(output, "- Calories: {}", format_count(u64::from(daily.calories)));
    let _ = writeln!(output, "- Distance: {}", format_distance(daily.distance));
    let _ = writeln!(output, "- Active Min: {}", daily.active_minutes);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Daily Goals");
    for goal in goals.iter() {
        let _ = writeln!(
            output,
            "- {}: {} / {} ({}% completed){}",
            goal.metric.label(),
            format_count(u64::from(goal.current)),
            format_count(u64::from(goal.goal)),
            goal.progress.percentage,
            if goal.is_met() { " done" } else { "" }
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekly Activity");
    if weekly.daily_steps.is_empty() {
        let _ = writeln!(output, "No activity recorded for this week.");
    } else {
        // Labels assume a full seven-day window ending on `end_date`.
        let offset = labels.len().saturating_sub(weekly.daily_steps.len());
        for (index, steps) in weekly.daily_steps.iter().enumerate() {
            let label = labels.get(index + offset).map(String::as_str).unwrap_or("-");
            let _ = writeln!(
                output,
                "- {}: {} steps, {} kcal, {} min",
                label,
                format_count(u64::from(*steps)),
                format_count(u64::from(weekly.daily_calories.get(index).copied().unwrap_or(0))),
                weekly.daily_active_minutes.get(index).copied().unwrap_or(0)
            );
        }
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Total Steps: {}", format_count(week.total_steps));
    let _ = writeln!(output, "Total Calories: {}", format_count(week.total_calories));
    let _ = writeln!(output, "Avg. Active Minutes: {}", week.avg_active_minutes);
    let _ = writeln!(
        output,
        "Goals met: steps {} days, calories {} days, active minutes {} days",
        week.days_step_goal_met, week.days_calorie_goal_met, week.days_active_goal_met
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile");
    let _ = writeln!(output, "- Age: {} years", profile.age);
    let _ = writeln!(output, "- Weight: {} kg", profile.weight);
    let _ = writeln!(output, "- Height: {} cm", profile.height);
    let _ = writeln!(
        output,
        "- Goals: {} steps, {} kcal, {} active minutes",
        format_count(u64::from(profile.goals.steps)),
        format_count(u64::from(profile.goals.calories)),
        profile.goals.active_minutes
    );

    Ok(output)
}
