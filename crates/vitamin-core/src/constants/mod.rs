// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Comparison policy thresholds, unit conversion factors, defaults, and env keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Fixed classification policy for nutrient verdicts
pub mod policy {
    /// Product amounts below this fraction of the target are deficient
    pub const DEFICIENT_RATIO: f64 = 0.8;
    /// Product amounts above this multiple of the target are excessive
    pub const EXCESSIVE_RATIO: f64 = 2.0;
    /// More deficient verdicts than this make a product a poor match
    pub const POOR_DEFICIENCY_COUNT: usize = 2;
}

/// Unit conversion factors (to micrograms)
pub mod units {
    /// Micrograms per gram
    pub const MCG_PER_G: f64 = 1_000_000.0;
    /// Micrograms per milligram
    pub const MCG_PER_MG: f64 = 1_000.0;
    /// Vitamin D: 1 IU = 0.025 mcg cholecalciferol
    pub const VITAMIN_D_MCG_PER_IU: f64 = 0.025;
    /// Vitamin A: 1 IU = 0.3 mcg RAE (preformed retinol)
    pub const VITAMIN_A_MCG_PER_IU: f64 = 0.3;
    /// Vitamin E: 1 IU = 0.45 mg synthetic (dl) alpha-tocopherol, the form in most supplements
    pub const VITAMIN_E_MCG_PER_IU: f64 = 450.0;
}

/// Life-stage band boundaries in years (lower bound of each band after the first)
pub mod life_stage {
    /// 0-6 months ends here
    pub const INFANT_YOUNG_MAX: f64 = 0.5;
    /// 7-12 months ends here
    pub const INFANT_OLDER_MAX: f64 = 1.0;
    /// 1-3 years ends here
    pub const TODDLER_MAX: f64 = 4.0;
    /// 4-8 years ends here
    pub const CHILD_MAX: f64 = 9.0;
    /// 9-13 years ends here
    pub const PRETEEN_MAX: f64 = 14.0;
    /// 14-18 years ends here
    pub const TEEN_MAX: f64 = 19.0;
    /// 19-30 years ends here
    pub const YOUNG_ADULT_MAX: f64 = 31.0;
    /// 31-50 years ends here
    pub const ADULT_MAX: f64 = 51.0;
    /// 51-70 years ends here
    pub const MIDDLE_AGE_MAX: f64 = 70.0;
}

/// User-facing phrases attached to verdicts
pub mod phrases {
    /// Product does not list the nutrient (or lists zero)
    pub const NOT_PROVIDED: &str = "Not provided";
    /// Above the tolerable upper intake level
    pub const ABOVE_SAFE_LIMIT: &str = "Above safe limit";
    /// Below the deficiency threshold
    pub const BELOW_RECOMMENDED: &str = "Below recommended";
    /// Above the excess multiplier but under any upper limit
    pub const MUCH_HIGHER: &str = "Much higher than needed";
    /// Within the adequate band
    pub const MEETS_NEEDS: &str = "Meets your needs";
    /// Product and target units have no defined conversion
    pub const UNITS_NOT_COMPARABLE: &str = "Units not comparable";

    /// Overall message for a good match
    pub const OVERALL_GOOD: &str = "This supplement is a good match for your needs";
    /// Overall message when something exceeds recommended levels
    pub const OVERALL_CAUTION: &str = "Caution: Some vitamins exceed recommended levels";
    /// Overall message for a poor match
    pub const OVERALL_POOR: &str = "This supplement may not meet your nutritional needs";
}

/// Default values
pub mod defaults {
    /// Canonical key of the fallback recommendation set
    pub const FALLBACK_DEMOGRAPHIC_KEY: &str = "female_19-30";
    /// Storage key the profile is kept under
    pub const PROFILE_STORAGE_KEY: &str = "vitaminProfile";
    /// Application directory name under the user config directory
    pub const APP_DIR_NAME: &str = "vitamin-scanner";
    /// Profile file name inside the application directory
    pub const PROFILE_FILE_NAME: &str = "profile.json";
    /// Product name used when only label data is available
    pub const SCANNED_LABEL_PRODUCT_NAME: &str = "Scanned supplement label";
    /// Barcode returned by the fixed barcode decoder when none is configured
    pub const DEMO_BARCODE: &str = "123456789";
}

/// Environment variable names
pub mod env_config {
    /// Override for the profile file location
    pub const PROFILE_PATH: &str = "VITAMIN_SCANNER_PROFILE_PATH";
    /// Default output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "VITAMIN_SCANNER_OUTPUT";
    /// Log output format (`json`, `compact`, `pretty`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Log level directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Include source file and line in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Service names for structured logging
pub mod service_names {
    /// Binary/service name
    pub const VITAMIN_SCANNER: &str = "vitamin-scanner";
}
