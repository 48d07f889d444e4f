use fuzzy_core::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("config error: {0}")]
    Config(String),

    #[error("parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scoring task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Workbook(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Workbook(e.to_string())
    }
}
