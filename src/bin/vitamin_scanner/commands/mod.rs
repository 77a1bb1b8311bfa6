// ABOUTME: Command modules for vitamin-scanner
// ABOUTME: Profile management, target listing, and product checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod check;
pub mod profile;
pub mod targets;

use vitamin_scanner::models::ReproductiveStatus;

/// Reproductive status from the `--pregnant` / `--lactating` flags
pub const fn status_from_flags(pregnant: bool, lactating: bool) -> ReproductiveStatus {
    if pregnant {
        ReproductiveStatus::Pregnant
    } else if lactating {
        ReproductiveStatus::Lactating
    } else {
        ReproductiveStatus::None
    }
}
