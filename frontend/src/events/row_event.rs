/// Which vertical stack a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSection {
    Input,
    Switch,
}

/// Interactions reported by a single row (View -> ViewModel)
#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    /// The row itself was clicked (text rows only)
    Tapped,
    /// Field text changed; carries the full new text
    FieldChanged(String),
    SwitchToggled(bool),
}
