use std::f64::consts::PI;

use crate::models::{ActivityData, GoalProgress, Metric, ProgressResult, RingGeometry};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("goal must be a positive number, got {goal}")]
pub struct InvalidGoalError {
    pub goal: f64,
}

/// Completion of `current` against `goal`, clamped so over-achievement
/// reads as 100%.
pub fn compute_progress(current: f64, goal: f64) -> Result<ProgressResult, InvalidGoalError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(InvalidGoalError { goal });
    }

    let ratio = current / goal;
    let fraction = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let percentage = (fraction * 100.0).round() as u8;

    Ok(ProgressResult {
        fraction,
        percentage,
    })
}

pub fn metric_progress(
    metric: Metric,
    activity: &ActivityData,
) -> Result<GoalProgress, InvalidGoalError> {
    let current = metric.current(activity);
    let goal = metric.goal(&activity.goals);
    let progress = compute_progress(f64::from(current), f64::from(goal))?;

    Ok(GoalProgress {
        metric,
        current,
        goal,
        progress,
    })
}

/// Goal bars for a day: steps, calories, active minutes.
pub fn daily_goal_progress(
    activity: &ActivityData,
) -> Result<Vec<GoalProgress>, InvalidGoalError> {
    Metric::ALL
        .iter()
        .map(|metric| metric_progress(*metric, activity))
        .collect()
}

pub fn ring_geometry(progress: &ProgressResult, radius: f64, stroke_width: f64) -> RingGeometry {
    let circumference = 2.0 * PI * radius;
    RingGeometry {
        circumference,
        dash_offset: circumference * (1.0 - progress.fraction),
        size: radius * 2.0 + stroke_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goals;
    use chrono::Utc;

    fn sample_activity() -> ActivityData {
        ActivityData {
            date: Utc::now(),
            steps: 7842,
            calories: 1875,
            distance: 5.3,
            active_minutes: 42,
            goals: Goals {
                steps: 10000,
                calories: 2500,
                active_minutes: 30,
            },
        }
    }

    #[test]
    fn zero_current_is_zero_progress() {
        let result = compute_progress(0.0, 10000.0).unwrap();
        assert_eq!(result.fraction, 0.0);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn reaching_goal_is_complete() {
        let result = compute_progress(10000.0, 10000.0).unwrap();
        assert_eq!(result.fraction, 1.0);
        assert_eq!(result.percentage, 100);
        assert!(result.is_complete());
    }

    #[test]
    fn over_achievement_is_clamped() {
        let result = compute_progress(12000.0, 10000.0).unwrap();
        assert_eq!(result.fraction, 1.0);
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn half_way() {
        let result = compute_progress(5000.0, 10000.0).unwrap();
        assert_eq!(result.fraction, 0.5);
        assert_eq!(result.percentage, 50);
        assert!(!result.is_complete());
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let result = compute_progress(6543.0, 10000.0).unwrap();
        assert!((result.fraction - 0.6543).abs() < 1e-12);
        assert_eq!(result.percentage, 65);

        assert_eq!(compute_progress(6560.0, 10000.0).unwrap().percentage, 66);
        assert_eq!(compute_progress(9960.0, 10000.0).unwrap().percentage, 100);
    }

    #[test]
    fn non_positive_goal_is_rejected() {
        assert_eq!(
            compute_progress(100.0, 0.0),
            Err(InvalidGoalError { goal: 0.0 })
        );
        assert!(compute_progress(100.0, -5.0).is_err());
        assert!(compute_progress(100.0, f64::NAN).is_err());
        assert!(compute_progress(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn degenerate_current_stays_in_range() {
        assert_eq!(compute_progress(-20.0, 100.0).unwrap().fraction, 0.0);
        assert_eq!(compute_progress(f64::NAN, 100.0).unwrap().fraction, 0.0);
        assert_eq!(compute_progress(f64::INFINITY, 100.0).unwrap().percentage, 100);
    }

    #[test]
    fn fraction_is_bounded_across_inputs() {
        for goal in [1.0, 30.0, 2500.0, 10000.0] {
            for current in [0.0, 0.5, 29.0, 2499.0, 10000.0, 1e9] {
                let result = compute_progress(current, goal).unwrap();
                assert!((0.0..=1.0).contains(&result.fraction));
                assert!(result.percentage <= 100);
            }
        }
    }

    #[test]
    fn daily_goals_cover_each_metric_in_order() {
        let goals = daily_goal_progress(&sample_activity()).unwrap();
        let metrics: Vec<Metric> = goals.iter().map(|g| g.metric).collect();
        assert_eq!(
            metrics,
            vec![Metric::Steps, Metric::Calories, Metric::ActiveMinutes]
        );
        assert_eq!(goals[0].progress.percentage, 78);
        assert_eq!(goals[1].progress.percentage, 75);
        assert!(goals[2].progress.is_complete());
        assert!(goals[2].is_met());
    }

    #[test]
    fn rounding_to_full_is_not_meeting_goal() {
        let mut activity = sample_activity();
        activity.steps = 9950;
        let steps = metric_progress(Metric::Steps, &activity).unwrap();
        assert!(steps.progress.is_complete());
        assert!(!steps.is_met());
    }

    #[test]
    fn daily_goals_fail_on_zero_goal() {
        let mut activity = sample_activity();
        activity.goals.calories = 0;
        assert!(daily_goal_progress(&activity).is_err());
    }

    #[test]
    fn ring_offset_tracks_fraction() {
        let progress = compute_progress(5000.0, 10000.0).unwrap();
        let ring = ring_geometry(&progress, 100.0, 20.0);
        assert!((ring.circumference - 2.0 * PI * 100.0).abs() < 1e-9);
        assert!((ring.dash_offset - ring.circumference / 2.0).abs() < 1e-9);
        assert_eq!(ring.size, 220.0);

        let full = compute_progress(12000.0, 10000.0).unwrap();
        assert_eq!(ring_geometry(&full, 100.0, 20.0).dash_offset, 0.0);
    }
}
