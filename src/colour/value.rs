use plist::Value;

use crate::colour::quantizer::QuantizedRgb;
use crate::core::error::{Error, Result};

pub const RED_COMPONENT: &str = "Red Component";
pub const GREEN_COMPONENT: &str = "Green Component";
pub const BLUE_COMPONENT: &str = "Blue Component";

/// A colour as iTerm2 stores it: three float components in `[0.0, 1.0]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColourValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColourValue {
    /// Read the component dictionary stored under `field`.
    ///
    /// Extra keys such as `Alpha Component` or `Color Space` are ignored.
    pub fn from_plist(field: &str, value: &Value) -> Result<Self> {
        let dict = value.as_dictionary().ok_or_else(|| Error::MalformedColour {
            field: field.to_string(),
            reason: "not a dictionary".to_string(),
        })?;

        let component = |key: &str| -> Result<f64> {
            let raw = dict.get(key).ok_or_else(|| Error::MalformedColour {
                field: field.to_string(),
                reason: format!("missing {}", key),
            })?;
            component_as_f64(raw).ok_or_else(|| Error::MalformedColour {
                field: field.to_string(),
                reason: format!("{} is not a number", key),
            })
        };

        Ok(Self {
            red: component(RED_COMPONENT)?,
            green: component(GREEN_COMPONENT)?,
            blue: component(BLUE_COMPONENT)?,
        })
    }

    pub fn quantize(&self) -> QuantizedRgb {
        QuantizedRgb::from_components(self.red, self.green, self.blue)
    }

    /// Equality on the quantized form, which is what matching uses.
    pub fn matches(&self, other: &ColourValue) -> bool {
        self.quantize() == other.quantize()
    }
}

#[cfg(test)]
impl ColourValue {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Component dictionary in the layout iTerm2 writes.
    pub fn to_plist(&self) -> Value {
        let mut dict = plist::Dictionary::new();
        dict.insert(RED_COMPONENT.to_string(), Value::Real(self.red));
        dict.insert(GREEN_COMPONENT.to_string(), Value::Real(self.green));
        dict.insert(BLUE_COMPONENT.to_string(), Value::Real(self.blue));
        Value::Dictionary(dict)
    }
}

// Preferences written by older iTerm2 builds sometimes hold integers or
// numeric strings here.
fn component_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Real(v) => Some(*v),
        Value::Integer(_) => value.as_signed_integer().map(|v| v as f64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
