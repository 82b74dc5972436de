//! Open/closed state for the dropdown layout of the controls.

/// How [`LanguageCurrencyControls`](super::LanguageCurrencyControls) lays itself out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlsLayout {
    /// Fixed panel pinned to the viewport bottom, shown near the end of the page.
    #[default]
    Floating,
    /// Two inline toggle buttons, each opening its own list.
    Dropdowns,
}

/// The two dropdowns open and close independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub language_open: bool,
    pub currency_open: bool,
}

impl DropdownState {
    pub fn toggle_language(&mut self) {
        self.language_open = !self.language_open;
    }

    pub fn toggle_currency(&mut self) {
        self.currency_open = !self.currency_open;
    }

    /// A pick closes the list it was made from.
    pub fn language_chosen(&mut self) {
        self.language_open = false;
    }

    pub fn currency_chosen(&mut self) {
        self.currency_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dropdowns_start_closed() {
        let state = DropdownState::default();
        assert!(!state.language_open);
        assert!(!state.currency_open);
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = DropdownState::default();
        state.toggle_language();
        assert!(state.language_open);
        assert!(!state.currency_open);

        state.toggle_currency();
        assert!(state.language_open);
        assert!(state.currency_open);

        state.toggle_language();
        assert!(!state.language_open);
        assert!(state.currency_open);
    }

    #[test]
    fn choosing_closes_only_its_own_list() {
        let mut state = DropdownState {
            language_open: true,
            currency_open: true,
        };
        state.currency_chosen();
        assert!(state.language_open);
        assert!(!state.currency_open);
        state.language_chosen();
        assert!(!state.language_open);
    }
}
