pub mod entry_codec;
pub mod errors;
pub mod events;
pub mod expander;
pub mod gate;
pub mod types;
