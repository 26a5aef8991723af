pub mod dense;
pub mod spectrum;

pub use dense::{C64, kron};
pub use spectrum::{eigh, Spectrum};
