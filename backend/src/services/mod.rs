//! Business logic services

pub mod plan;

pub use plan::PlanService;
