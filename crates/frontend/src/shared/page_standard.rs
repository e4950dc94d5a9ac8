//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"mercuriale--list"`) plus a
//! `data-page-category` attribute with one of the constants below. The
//! `--` separator makes the entity name searchable from the DOM
//! inspector straight into the corresponding `domain/` directory.

/// List of records — table with filters and sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case wizard / action page (onboarding, etc.).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System page (billing, team, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";
