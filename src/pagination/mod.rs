//! Pagination module
//!
//! Works out the current page, offset and total page count from a query
//! parameter such as `?page=3of12`.
//!
//! # Overview
//!
//! 1. [`Pagination::set`] reads the page from the URL and reports whether the
//!    total page count is already known.
//! 2. If it is not, [`Pagination::set_total`] takes the record count.
//! 3. [`Pagination::offset`] and [`Pagination::length`] (or
//!    [`Pagination::slice`]) select the records to show.

mod state;

pub use state::{PageInfo, Pagination};

#[cfg(test)]
mod tests;
