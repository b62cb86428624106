#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    #[error("failed reading dataset file: {source}")]
    CsvReadError {
        #[from]
        source: csv::Error,
    },
    #[error("failed to parse timestamp '{value}': {source}")]
    TimestampParseError {
        value: String,
        source: chrono::ParseError,
    },
    #[error("console input stream closed")]
    InputClosedError,
    #[error("{source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
