//! Diet reference table
//!
//! The table is stored as CSV with the header
//! `goal,diet_type,budget,meal_plan,protein,carbs,fats`. Macro columns hold
//! strings such as `"25g"`; they are parsed into [`Grams`] when the table is
//! loaded so nothing downstream handles the suffix.

use crate::errors::{PlanError, PlanResult};
use crate::models::{Budget, DietType, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Recommendation text used when no diet record matches
pub const FALLBACK_DIET_MESSAGE: &str = "Balanced healthy diet recommended";

/// A whole number of grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub u32);

impl Grams {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Grams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

/// Parse a `"<integer>g"` string
///
/// Surrounding whitespace is ignored. Returns `None` when the suffix is
/// missing or the remainder is not an unsigned integer.
pub fn parse_grams(raw: &str) -> Option<Grams> {
    let digits = raw.trim().strip_suffix('g')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(Grams)
}

/// Protein, carbohydrate and fat content of a meal plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: Grams,
    pub carbs: Grams,
    pub fats: Grams,
}

impl MacroBreakdown {
    /// Nutrient name and gram value pairs, in display order
    pub fn entries(&self) -> [(&'static str, u32); 3] {
        [
            ("Protein", self.protein.value()),
            ("Carbs", self.carbs.value()),
            ("Fats", self.fats.value()),
        ]
    }

    /// Combined grams; widened so three `u32` columns cannot overflow
    pub fn total(&self) -> u64 {
        self.entries()
            .iter()
            .map(|(_, grams)| u64::from(*grams))
            .sum()
    }
}

/// One row of the diet reference table
///
/// Key columns keep the raw text from storage; lookups compare them
/// against the wire spelling of each enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecord {
    pub goal: String,
    pub diet_type: String,
    pub budget: String,
    pub meal_plan: String,
    #[serde(flatten)]
    pub macros: MacroBreakdown,
}

impl DietRecord {
    /// Whether all three key columns equal the given selection exactly
    pub fn matches(&self, goal: Goal, diet_type: DietType, budget: Budget) -> bool {
        self.goal == goal.as_str()
            && self.diet_type == diet_type.as_str()
            && self.budget == budget.as_str()
    }
}

/// CSV row before macro parsing
#[derive(Debug, Deserialize)]
struct RawDietRow {
    goal: String,
    diet_type: String,
    budget: String,
    meal_plan: String,
    protein: String,
    carbs: String,
    fats: String,
}

impl RawDietRow {
    fn into_record(self, row: u64) -> PlanResult<DietRecord> {
        let grams = |field: &'static str, value: String| {
            parse_grams(&value).ok_or(PlanError::MalformedGrams { field, row, value })
        };

        Ok(DietRecord {
            macros: MacroBreakdown {
                protein: grams("protein", self.protein)?,
                carbs: grams("carbs", self.carbs)?,
                fats: grams("fats", self.fats)?,
            },
            goal: self.goal,
            diet_type: self.diet_type,
            budget: self.budget,
            meal_plan: self.meal_plan,
        })
    }
}

/// Return the first record matching all three keys
pub fn lookup_diet_plan<'a>(
    records: &'a [DietRecord],
    goal: Goal,
    diet_type: DietType,
    budget: Budget,
) -> Option<&'a DietRecord> {
    records
        .iter()
        .find(|record| record.matches(goal, diet_type, budget))
}

/// Outcome of a diet lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DietRecommendation {
    Matched { record: DietRecord },
    Fallback { message: String },
}

impl DietRecommendation {
    /// Wrap a lookup result, substituting the fallback message on no match
    pub fn from_lookup(record: Option<&DietRecord>) -> Self {
        match record {
            Some(record) => DietRecommendation::Matched {
                record: record.clone(),
            },
            None => DietRecommendation::Fallback {
                message: FALLBACK_DIET_MESSAGE.to_string(),
            },
        }
    }

    pub fn record(&self) -> Option<&DietRecord> {
        match self {
            DietRecommendation::Matched { record } => Some(record),
            DietRecommendation::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DietRecommendation::Fallback { .. })
    }
}

/// In-memory diet reference table
///
/// Loaded once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietTable {
    records: Vec<DietRecord>,
}

impl DietTable {
    pub fn new(records: Vec<DietRecord>) -> Self {
        Self { records }
    }

    /// Load a table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> PlanResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a table from CSV text
    pub fn from_csv_str(csv: &str) -> PlanResult<Self> {
        Self::from_reader(csv.as_bytes())
    }

    /// Load a table from any CSV source
    ///
    /// Fails on the first malformed row; a table is never partially loaded.
    /// Fields are read verbatim. Only the gram columns tolerate surrounding
    /// whitespace, so a padded key column never matches a selection.
    pub fn from_reader<R: Read>(reader: R) -> PlanResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

        let mut records = Vec::new();
        for (index, result) in csv_reader.deserialize::<RawDietRow>().enumerate() {
            let raw = result?;
            // Row numbers are 1-based and exclude the header
            records.push(raw.into_record(index as u64 + 1)?);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DietRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lookup(&self, goal: Goal, diet_type: DietType, budget: Budget) -> Option<&DietRecord> {
        lookup_diet_plan(&self.records, goal, diet_type, budget)
    }

    /// Look up a record and substitute the fallback on no match
    pub fn recommend(&self, goal: Goal, diet_type: DietType, budget: Budget) -> DietRecommendation {
        DietRecommendation::from_lookup(self.lookup(goal, diet_type, budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE_CSV: &str = "\
goal,diet_type,budget,meal_plan,protein,carbs,fats
Weight Loss,Veg,Low,Oats and dal,60g,150g,40g
Muscle Gain,Non-Veg,Medium,Chicken and rice,140g,300g,70g
";

    fn record(goal: &str, diet: &str, budget: &str, meal: &str) -> DietRecord {
        DietRecord {
            goal: goal.to_string(),
            diet_type: diet.to_string(),
            budget: budget.to_string(),
            meal_plan: meal.to_string(),
            macros: MacroBreakdown {
                protein: Grams(50),
                carbs: Grams(100),
                fats: Grams(30),
            },
        }
    }

    #[rstest]
    #[case("25g", Some(25))]
    #[case(" 140g ", Some(140))]
    #[case("0g", Some(0))]
    #[case("25", None)]
    #[case("g", None)]
    #[case("abc", None)]
    #[case("12kg", None)]
    #[case("-5g", None)]
    #[case("", None)]
    fn test_parse_grams(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_grams(raw).map(|g| g.value()), expected);
    }

    #[test]
    fn test_grams_display() {
        assert_eq!(Grams(25).to_string(), "25g");
    }

    #[test]
    fn test_load_from_csv() {
        let table = DietTable::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 2);

        let first = &table.records()[0];
        assert_eq!(first.goal, "Weight Loss");
        assert_eq!(first.meal_plan, "Oats and dal");
        assert_eq!(first.macros.protein, Grams(60));
        assert_eq!(first.macros.carbs, Grams(150));
        assert_eq!(first.macros.fats, Grams(40));
        assert_eq!(first.macros.total(), 250);
    }

    #[test]
    fn test_macro_total_near_u32_limit() {
        let csv = "goal,diet_type,budget,meal_plan,protein,carbs,fats\n\
                   Muscle Gain,Veg,Low,Bulk,4000000000g,4000000000g,35g\n";
        let table = DietTable::from_csv_str(csv).unwrap();
        let macros = table.records()[0].macros;
        assert_eq!(macros.protein.value(), 4_000_000_000);
        assert_eq!(macros.total(), 8_000_000_035);

        let max = MacroBreakdown {
            protein: Grams(u32::MAX),
            carbs: Grams(u32::MAX),
            fats: Grams(u32::MAX),
        };
        assert_eq!(max.total(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_padded_key_columns_do_not_match() {
        let csv = "goal,diet_type,budget,meal_plan,protein,carbs,fats\n\
                   Weight Loss, Veg ,Low,Oats and dal, 60g ,150g,40g\n";
        let table = DietTable::from_csv_str(csv).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.diet_type, " Veg ");
        assert_eq!(record.macros.protein, Grams(60));
        assert!(table.lookup(Goal::WeightLoss, DietType::Veg, Budget::Low).is_none());
        assert!(table.recommend(Goal::WeightLoss, DietType::Veg, Budget::Low).is_fallback());
    }

    #[test]
    fn test_load_rejects_malformed_macro() {
        let csv = "\
goal,diet_type,budget,meal_plan,protein,carbs,fats
Weight Loss,Veg,Low,Oats,60g,150g,40g
Muscle Gain,Veg,Low,Paneer,90,200g,50g
";
        let err = DietTable::from_csv_str(csv).unwrap_err();
        match err {
            PlanError::MalformedGrams { field, row, value } => {
                assert_eq!(field, "protein");
                assert_eq!(row, 2);
                assert_eq!(value, "90");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_missing_column() {
        let csv = "goal,diet_type,budget,meal_plan,protein,carbs\nWeight Loss,Veg,Low,Oats,60g,150g\n";
        assert!(matches!(DietTable::from_csv_str(csv), Err(PlanError::Csv(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = DietTable::from_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, PlanError::Io(_)));
    }

    #[test]
    fn test_lookup_single_match() {
        let records = vec![
            record("Weight Loss", "Veg", "Low", "Oats"),
            record("Weight Loss", "Veg", "Medium", "Quinoa"),
        ];
        let found = lookup_diet_plan(&records, Goal::WeightLoss, DietType::Veg, Budget::Low);
        assert_eq!(found.map(|r| r.meal_plan.as_str()), Some("Oats"));
    }

    #[test]
    fn test_lookup_no_match() {
        let records = vec![record("Muscle Gain", "Non-Veg", "Medium", "Chicken")];
        assert!(lookup_diet_plan(&records, Goal::WeightLoss, DietType::Veg, Budget::Low).is_none());
        assert!(lookup_diet_plan(&[], Goal::WeightLoss, DietType::Veg, Budget::Low).is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let records = vec![record("weight loss", "veg", "low", "Oats")];
        assert!(lookup_diet_plan(&records, Goal::WeightLoss, DietType::Veg, Budget::Low).is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let records = vec![
            record("General Fitness", "Non-Veg", "Low", "Eggs"),
            record("General Fitness", "Non-Veg", "Low", "Fish"),
        ];
        let found =
            lookup_diet_plan(&records, Goal::GeneralFitness, DietType::NonVeg, Budget::Low).unwrap();
        assert_eq!(found.meal_plan, "Eggs");
    }

    #[test]
    fn test_recommend_falls_back() {
        let table = DietTable::from_csv_str(SAMPLE_CSV).unwrap();

        let matched = table.recommend(Goal::MuscleGain, DietType::NonVeg, Budget::Medium);
        assert!(!matched.is_fallback());
        assert_eq!(matched.record().unwrap().meal_plan, "Chicken and rice");

        let fallback = table.recommend(Goal::GeneralFitness, DietType::Veg, Budget::Medium);
        assert_eq!(
            fallback,
            DietRecommendation::Fallback {
                message: FALLBACK_DIET_MESSAGE.to_string()
            }
        );
        assert!(fallback.record().is_none());
    }

    #[test]
    fn test_recommendation_serializes_with_kind_tag() {
        let fallback = DietRecommendation::from_lookup(None);
        let json = serde_json::to_value(&fallback).unwrap();
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["message"], FALLBACK_DIET_MESSAGE);
    }
}
