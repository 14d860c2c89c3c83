//! Reserved identifiers and default sizes.

/// Quiz category id meaning "every known category".
pub const ALL_CATEGORIES: i64 = 0;

/// Page size used when the caller (or config) does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The first page number. Pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

/// Categories inserted by `trivia seed` into an empty store.
pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
