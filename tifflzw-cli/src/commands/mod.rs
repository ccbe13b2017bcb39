//! Command implementations for the tifflzw CLI.

pub mod compress;
pub mod decompress;
pub mod inspect;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use inspect::cmd_inspect;
