// Utils compartidos

pub mod dialogs;
pub mod i18n;
pub mod storage;

pub use i18n::*;
