use thiserror::Error;

pub type BsDateResult<T> = Result<T, BsDateError>;

#[derive(Error, Debug)]
pub enum BsDateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Schema error: {0}")]
    Schema(String),
}
