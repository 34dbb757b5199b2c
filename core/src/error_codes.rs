//! Stable error codes attached to every error this crate reports.

pub const ARRAY_EMPTY: &str = "TBLCMP_ARRAY_001";
pub const ARRAY_DUPLICATE_COLUMN: &str = "TBLCMP_ARRAY_002";
pub const ARRAY_ROW_LENGTH: &str = "TBLCMP_ARRAY_003";

pub const CONFIG_UNKNOWN_METHOD: &str = "TBLCMP_CONFIG_001";
pub const CONFIG_CONFLICTING_FILTERS: &str = "TBLCMP_CONFIG_002";
pub const CONFIG_NO_COLUMNS: &str = "TBLCMP_CONFIG_003";
pub const CONFIG_COLUMN_NOT_FOUND: &str = "TBLCMP_CONFIG_004";
pub const CONFIG_COLUMNS_MISMATCH: &str = "TBLCMP_CONFIG_005";
pub const CONFIG_DUPLICATE_TARGET: &str = "TBLCMP_CONFIG_006";
