mod decode_error;
mod highlight_error;

pub use decode_error::DecodeError;
pub use highlight_error::HighlightError;
