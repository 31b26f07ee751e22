//! Screen modules for TUI.

pub mod drinks;
pub mod menu;
pub mod wheel;

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

/// Available screens in the TUI.
#[derive(Debug, Clone, Copy, Default, Display, EnumIter, FromRepr, PartialEq, Eq)]
pub enum Screen {
    #[default]
    #[strum(to_string = "Menu")]
    Menu,

    #[strum(to_string = "All drinks")]
    Drinks,
}

impl Screen {
    /// The next screen, wrapping around
    pub fn next(self) -> Self {
        Self::from_repr((self as usize + 1) % Self::iter().count()).unwrap_or_default()
    }
}
