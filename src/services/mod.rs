//! The data-shaping pipeline, leaves first: rows are filtered, grouped,
//! classified, consolidated and finally assembled into view models.

pub mod classification;
pub mod consolidation;
pub mod grouping;
pub mod highlights;
pub mod row_filter;
pub mod sources;
pub mod view_builder;

pub use classification::CategoryRules;
pub use sources::RowSource;
pub use view_builder::ViewBuilder;
