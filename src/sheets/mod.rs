//! Sheet writer implementations

pub mod google;

pub use google::GoogleSheetsWriter;
