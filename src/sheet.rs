//! Sheet writer abstraction
//!
//! The presenter only needs two operations: wipe the tab and append one
//! row. Keeping them behind a trait lets the rendering contract be tested
//! without a Google account.

use async_trait::async_trait;

use crate::error::RenderError;
use crate::types::Row;

/// Trait for the spreadsheet destination
#[async_trait]
pub trait SheetWriter: Send + Sync {
    /// Removes all values from the target tab
    async fn clear(&self) -> Result<(), RenderError>;

    /// Appends one row after the current contents of the tab
    async fn append_row(&self, cells: &Row) -> Result<(), RenderError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Call record for asserting the exact write sequence
    #[derive(Debug, Clone, PartialEq)]
    pub enum SheetCall {
        Clear,
        AppendRow(Row),
    }

    /// Mock sheet that records every call in order
    #[derive(Default)]
    pub struct MockSheet {
        calls: Mutex<Vec<SheetCall>>,
        fail_appends: Mutex<bool>,
    }

    impl MockSheet {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every subsequent append fail with an API error
        pub fn fail_appends(&self) {
            *self.fail_appends.lock().unwrap() = true;
        }

        pub fn calls(&self) -> Vec<SheetCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Returns only the appended rows, in order
        pub fn rows(&self) -> Vec<Row> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    SheetCall::AppendRow(row) => Some(row),
                    SheetCall::Clear => None,
                })
                .collect()
        }
    }

    #[async_trait]
    impl SheetWriter for MockSheet {
        async fn clear(&self) -> Result<(), RenderError> {
            self.calls.lock().unwrap().push(SheetCall::Clear);
            Ok(())
        }

        async fn append_row(&self, cells: &Row) -> Result<(), RenderError> {
            if *self.fail_appends.lock().unwrap() {
                return Err(RenderError::Api("append rejected (mock)".to_string()));
            }
            self.calls
                .lock()
                .unwrap()
                .push(SheetCall::AppendRow(cells.clone()));
            Ok(())
        }
    }
}
