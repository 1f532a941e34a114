//! Utilities: option resolution with environment variable fallbacks.
//!
//! Every tunable follows the same precedence: the command line option, then
//! the environment variable (which a local `.env` file can provide via
//! dotenv), then the built-in default.
mod functions;

pub use functions::*;
