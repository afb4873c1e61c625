//! Table errors
//!
//! Rendering itself cannot fail; these cover sorting requests and export.

/// Errors raised by table operations
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// No column with this key is declared
	#[error("Unknown column: {0}")]
	UnknownColumn(String),
	/// The column exists but is not sortable
	#[error("Column '{0}' is not sortable")]
	NotSortable(String),
	/// Writing the export failed
	#[cfg(feature = "export")]
	#[error("CSV export failed: {0}")]
	Csv(#[from] csv::Error),
	/// Flushing the export failed
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result alias for [`TableError`]
pub type TableResult<T> = Result<T, TableError>;
