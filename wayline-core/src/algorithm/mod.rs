pub use self::lowpass::SimpleExpSmoothing;

mod lowpass;
