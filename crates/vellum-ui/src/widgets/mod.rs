pub mod button;

pub use button::{ButtonError, ButtonPorts, ButtonProcess, ButtonState};
