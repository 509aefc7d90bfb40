use std::str::FromStr;

use crate::models::{Goals, UserProfile};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("{field} is not a valid number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("Age must be between 1 and 130, got {0}")]
    AgeOutOfRange(u32),
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}

/// Raw text of the profile form. Unset fields keep the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub step_goal: Option<String>,
    pub calorie_goal: Option<String>,
}

impl ProfileEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.step_goal.is_none()
            && self.calorie_goal.is_none()
    }

    /// Parses the form on top of `current`. The active-minutes goal is not
    /// editable and is carried over.
    pub fn apply(&self, current: &UserProfile) -> Result<UserProfile, ProfileError> {
        let name = match &self.name {
            Some(name) => name.trim().to_string(),
            None => current.name.clone(),
        };

        let profile = UserProfile {
            id: current.id.clone(),
            name,
            age: parse_or("Age", self.age.as_deref(), current.age)?,
            weight: parse_or("Weight", self.weight.as_deref(), current.weight)?,
            height: parse_or("Height", self.height.as_deref(), current.height)?,
            goals: Goals {
                steps: parse_or("Step goal", self.step_goal.as_deref(), current.goals.steps)?,
                calories: parse_or(
                    "Calorie goal",
                    self.calorie_goal.as_deref(),
                    current.goals.calories,
                )?,
                active_minutes: current.goals.active_minutes,
            },
        };

        validate(&profile)?;
        Ok(profile)
    }
}

fn parse_or<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
    fallback: T,
) -> Result<T, ProfileError> {
    match raw {
        None => Ok(fallback),
        Some(value) => value.trim().parse().map_err(|_| ProfileError::NotANumber {
            field,
            value: value.to_string(),
        }),
    }
}

pub fn validate(profile: &UserProfile) -> Result<(), ProfileError> {
    if profile.name.trim().is_empty() {
        return Err(ProfileError::EmptyName);
    }
    if !(1..=130).contains(&profile.age) {
        return Err(ProfileError::AgeOutOfRange(profile.age));
    }
    if !profile.weight.is_finite() || profile.weight <= 0.0 {
        return Err(ProfileError::NonPositive { field: "Weight" });
    }
    if !profile.height.is_finite() || profile.height <= 0.0 {
        return Err(ProfileError::NonPositive { field: "Height" });
    }

    let goals = [
        ("Step goal", profile.goals.steps),
        ("Calorie goal", profile.goals.calories),
        ("Active minutes goal", profile.goals.active_minutes),
    ];
    for (field, value) in goals {
        if value == 0 {
            return Err(ProfileError::NonPositive { field });
        }
    }

    Ok(())
}
