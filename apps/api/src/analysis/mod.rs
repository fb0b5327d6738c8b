//! The screening session surface: upload-and-score, then on-demand report.

pub mod handlers;
