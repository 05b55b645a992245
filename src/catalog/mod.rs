//! Component catalog: the built-in entries and the query pipeline over them.

pub mod data;
pub mod query;

pub use data::builtin_catalog;
pub use query::{
    count_matching, filter_sorted, query, CatalogQuery, CategoryFilter, QueryPage, SortOrder,
};
