//! Weekly workout schedules
//!
//! Each goal maps to exactly seven activities, Monday through Sunday.

use crate::models::Goal;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Days of the week in schedule order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English day name
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One day of a weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub activity: String,
}

/// A goal's seven-day schedule
///
/// `days` is indexed by [`Weekday::num_days_from_monday`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWorkoutPlan {
    pub goal: Goal,
    pub days: [WorkoutDay; 7],
}

impl WeeklyWorkoutPlan {
    /// Activity scheduled for a weekday
    pub fn activity_on(&self, day: Weekday) -> &str {
        &self.days[day.num_days_from_monday() as usize].activity
    }

    /// Number of days without a scheduled workout
    pub fn rest_days(&self) -> usize {
        self.days.iter().filter(|d| d.activity == "Rest").count()
    }
}

/// Activity labels for each goal
///
/// Built once and shared read-only; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlanTable {
    weight_loss: [&'static str; 7],
    muscle_gain: [&'static str; 7],
    general_fitness: [&'static str; 7],
}

impl Default for WorkoutPlanTable {
    fn default() -> Self {
        Self {
            weight_loss: [
                "30 min Cardio",
                "Light Strength Training",
                "30 min Brisk Walk",
                "Cardio + Abs",
                "Full Body Workout",
                "Yoga or Stretching",
                "Rest",
            ],
            muscle_gain: [
                "Chest and Triceps",
                "Back and Biceps",
                "Legs Workout",
                "Shoulders",
                "Full Body Strength",
                "Core Training",
                "Rest",
            ],
            general_fitness: [
                "Jogging",
                "Yoga",
                "Strength Training",
                "Cardio",
                "Mixed Workout",
                "Outdoor Activity",
                "Rest",
            ],
        }
    }
}

impl WorkoutPlanTable {
    /// Activities for a goal, Monday first
    pub fn activities(&self, goal: Goal) -> &[&'static str; 7] {
        match goal {
            Goal::WeightLoss => &self.weight_loss,
            Goal::MuscleGain => &self.muscle_gain,
            Goal::GeneralFitness => &self.general_fitness,
        }
    }

    /// Pair each activity with its weekday
    pub fn weekly_workout_plan(&self, goal: Goal) -> WeeklyWorkoutPlan {
        let activities = self.activities(goal);
        let days = std::array::from_fn(|i| WorkoutDay {
            day: day_name(WEEK[i]).to_string(),
            activity: activities[i].to_string(),
        });

        WeeklyWorkoutPlan { goal, days }
    }
}
