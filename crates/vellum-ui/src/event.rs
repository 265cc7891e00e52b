/// Emitted when a button is pressed and released on itself.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ButtonClick {
    /// Id shared by the button's draw items.
    pub id: String,
}
