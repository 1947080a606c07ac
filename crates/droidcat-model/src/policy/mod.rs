mod color;
pub use color::ColorMode;

mod malformed;
pub use malformed::MalformedLinePolicy;
