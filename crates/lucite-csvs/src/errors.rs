use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    /// A data row failed one or more checks. `row` is the JSON rendering of
    /// the raw row, `reasons` holds every failed check in order.
    #[error(
        "Invalid Row [rowNumber={row_number}] [row={row}] \n Reasons: \n {}",
        .reasons.join("\n ")
    )]
    InvalidRow {
        row_number: usize,
        row: String,
        reasons: Vec<String>,
    },
}
