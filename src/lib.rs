pub mod catalog;
pub mod clock;
pub mod format;
pub mod timestamp;
pub mod util;
