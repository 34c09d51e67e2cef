mod common;
pub use self::common::{PagedQuery, Query, QueryCommon, UNKNOWN};

mod product;
pub use self::product::{CategoryGroupQuery, ProductQuery, ALL_CATEGORIES};
