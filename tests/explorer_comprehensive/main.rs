//! Explorer Comprehensive Test Suite
//!
//! End-to-end tests through the public `lineup` facade, from files on disk
//! to session views.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Dataset loading and graph construction
//! - **Tier 2**: Neighborhood queries on known datasets
//! - **Tier 3**: Session navigation
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test explorer_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Loading and construction
mod tier1_loading;

// Tier 2: Queries
mod tier2_queries;

// Tier 3: Sessions
mod tier3_sessions;
