//! Common library for the melo backend
//!
//! This crate provides shared functionality used across the melo services,
//! including document-store connectivity, error handling, and other common
//! utilities.

pub mod database;
pub mod error;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        let result = 2 + 2;
        assert_eq!(result, 4);
    }
}

/// Example usage of the database module
///
/// ```rust,no_run
/// use common::database::{DatabaseConfig, DocumentStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig::from_env();
///     let store = DocumentStore::connect(&config).await?;
///     println!("Storage configured: {}", store.is_connected());
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
