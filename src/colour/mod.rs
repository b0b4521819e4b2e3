pub mod fields;
pub mod quantizer;
pub mod value;

pub use fields::{is_colour_field, COLOUR_FIELDS};
pub use value::ColourValue;
