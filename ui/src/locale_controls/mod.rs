//! Language / currency picker shown in the footer.

mod state;
pub use state::{ControlsLayout, DropdownState};

mod view;
pub use view::LanguageCurrencyControls;
