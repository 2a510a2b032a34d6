pub mod actuation;
pub mod algorithm;
pub mod luminance;
pub mod math;

pub use self::actuation::{Actuation, Side};
pub use self::luminance::{Channel, Luminance};

pub trait Identity {
    /// Introduction message.
    ///
    /// Returns a string to introduce the object for the first time and
    /// should only be called once.
    fn intro() -> String;
}
