/// CSS-like color strings.
pub mod color;
