mod eligibility;
mod merge;
mod query_ops;
mod validation;

pub use eligibility::{is_eligible, is_resource, is_web_link};
pub use merge::{merge_utm, split_url, UrlParts};
pub use query_ops::QueryParams;
pub use validation::check_well_formed;
