use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("xml is not valid UTF-8: {0}")]
    XmlNonUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse xml: {0}")]
    XmlParse(#[from] roxmltree::Error),
    #[error("unrecognized color element <{0}>")]
    UnrecognizedElement(String),
}
