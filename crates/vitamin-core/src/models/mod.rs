// ABOUTME: Core data models for the Vitamin Scanner
// ABOUTME: Re-exports nutrient vocabulary, amounts, demographics, products, and verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Nutrient`: the canonical vitamin vocabulary and its evaluation order
//! - `NutrientAmount`: a parsed quantity with its unit
//! - `DemographicKey` / `UserProfile`: who the recommendations are for
//! - `ProductNutrientProfile` / `Product`: what the supplement label says
//! - `NutrientVerdict` / `OverallVerdict`: comparison results

mod amount;
mod demographic;
mod nutrient;
mod product;
mod verdict;

pub use amount::{AmountUnit, NutrientAmount};
pub use demographic::{DemographicKey, LifeStage, ReproductiveStatus, Sex, UserProfile};
pub use nutrient::{Nutrient, UnknownNutrient};
pub use product::{Product, ProductNutrientProfile};
pub use verdict::{NutrientVerdict, OverallVerdict, VerdictStatus};
