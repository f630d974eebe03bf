pub mod criteria;
pub mod filter;
pub mod parser;

pub use criteria::SearchFilters;
pub use filter::filter_candidates;
pub use parser::parse_filter_query;
