#![forbid(unsafe_code)]

pub mod batch;
pub mod error;
pub mod layout;
pub mod sheet;

pub use batch::process_directory;
pub use error::{GifsheetError, GifsheetResult};
pub use layout::GridLayout;
pub use sheet::build_spritesheet;
