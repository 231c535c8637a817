//! Domain models for the Fitness Planner
//!
//! The string spellings of every enum match the values used by the diet
//! reference table and the JSON API (`"Weight Loss"`, `"Non-Veg"`, ...).

use crate::errors::{PlanError, PlanResult};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fitness goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "General Fitness")]
    GeneralFitness,
}

impl Goal {
    /// Every goal, in the order offered to users
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::GeneralFitness];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| PlanError::UnknownGoal(s.to_string()))
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl DietType {
    pub const ALL: [DietType; 2] = [DietType::Veg, DietType::NonVeg];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "Veg",
            DietType::NonVeg => "Non-Veg",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietType::ALL
            .into_iter()
            .find(|diet| diet.as_str() == s)
            .ok_or_else(|| PlanError::UnknownDietType(s.to_string()))
    }
}

/// Food budget level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
}

impl Budget {
    pub const ALL: [Budget; 2] = [Budget::Low, Budget::Medium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Budget {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Budget::ALL
            .into_iter()
            .find(|budget| budget.as_str() == s)
            .ok_or_else(|| PlanError::UnknownBudget(s.to_string()))
    }
}

/// Daily time the user can spend exercising
///
/// Carried through the profile but not used by any calculation yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AvailableTime {
    #[serde(rename = "15 min")]
    Minutes15,
    #[default]
    #[serde(rename = "30 min")]
    Minutes30,
    #[serde(rename = "45 min")]
    Minutes45,
    #[serde(rename = "60 min")]
    Minutes60,
}

impl AvailableTime {
    pub const ALL: [AvailableTime; 4] = [
        AvailableTime::Minutes15,
        AvailableTime::Minutes30,
        AvailableTime::Minutes45,
        AvailableTime::Minutes60,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            AvailableTime::Minutes15 => 15,
            AvailableTime::Minutes30 => 30,
            AvailableTime::Minutes45 => 45,
            AvailableTime::Minutes60 => 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailableTime::Minutes15 => "15 min",
            AvailableTime::Minutes30 => "30 min",
            AvailableTime::Minutes45 => "45 min",
            AvailableTime::Minutes60 => "60 min",
        }
    }
}

impl fmt::Display for AvailableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailableTime {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvailableTime::ALL
            .into_iter()
            .find(|time| time.as_str() == s)
            .ok_or_else(|| PlanError::UnknownAvailableTime(s.to_string()))
    }
}

/// User inputs for a single plan calculation
///
/// Fields are private so a profile can only exist with in-range values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    age: u32,
    weight_kg: u32,
    height_cm: u32,
    goal: Goal,
    diet_preference: DietType,
    budget: Budget,
    available_time: AvailableTime,
}

impl UserProfile {
    /// Build a validated profile
    ///
    /// Fails with [`PlanError::Validation`] naming the first out-of-range field.
    pub fn new(
        age: u32,
        weight_kg: u32,
        height_cm: u32,
        goal: Goal,
        diet_preference: DietType,
        budget: Budget,
        available_time: AvailableTime,
    ) -> PlanResult<Self> {
        validation::validate_age(age).map_err(|msg| PlanError::validation("age", msg))?;
        validation::validate_weight_kg(weight_kg)
            .map_err(|msg| PlanError::validation("weight_kg", msg))?;
        validation::validate_height_cm(height_cm)
            .map_err(|msg| PlanError::validation("height_cm", msg))?;

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            goal,
            diet_preference,
            budget,
            available_time,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_kg(&self) -> u32 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn diet_preference(&self) -> DietType {
        self.diet_preference
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn available_time(&self) -> AvailableTime {
        self.available_time
    }
}
