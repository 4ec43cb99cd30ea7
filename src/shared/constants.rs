/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size for admin listings
pub const ADMIN_PAGE_SIZE: i64 = 50;

/// Maximum number of niche tags on a creator or campaign
pub const MAX_NICHE_TAGS: usize = 20;

/// Maximum length of a single niche tag
pub const MAX_NICHE_TAG_LEN: usize = 50;

/// Decimal places stored for a campaign budget
pub const BUDGET_SCALE: u32 = 2;

/// Budgets must stay below this amount (NUMERIC(12, 2))
pub const BUDGET_LIMIT: i64 = 10_000_000_000;
