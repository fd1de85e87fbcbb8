use datatable_model::FormatDescriptor;

use crate::registry::{FormatRegistry, Formatter};

/// Fallback rendering shared by the built-in formatters for values outside
/// their primary type.
fn display_raw(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Default formatter: renders any value as its plain string form.
#[derive(Debug, Clone, Default)]
pub struct StringFormatter;

impl Formatter for StringFormatter {
    fn format(&self, value: &serde_json::Value) -> String {
        display_raw(value)
    }

    fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor::new("string")
    }
}

/// Renders numbers with a fixed number of decimal places.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    pub decimals: u8,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl Formatter for NumberFormatter {
    fn format(&self, value: &serde_json::Value) -> String {
        match value.as_f64() {
            Some(n) => format!("{n:.prec$}", prec = usize::from(self.decimals)),
            None => display_raw(value),
        }
    }

    fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor::with_params("number", serde_json::json!({ "decimals": self.decimals }))
    }
}

/// Renders truthiness: JSON booleans directly, numbers as zero/non-zero.
#[derive(Debug, Clone, Default)]
pub struct BooleanFormatter;

impl Formatter for BooleanFormatter {
    fn format(&self, value: &serde_json::Value) -> String {
        let truthy = match value {
            serde_json::Value::Bool(b) => Some(*b),
            serde_json::Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            _ => None,
        };
        match truthy {
            Some(b) => b.to_string(),
            None => display_raw(value),
        }
    }

    fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor::new("boolean")
    }
}

/// Format registry over the built-in formatter kinds.
///
/// Unrecognized kinds and absent descriptors both fall back to the default
/// [`StringFormatter`], so a table whose producer attached a descriptor this
/// build does not know still renders.
#[derive(Debug, Clone, Default)]
pub struct SimpleFormatRegistry;

impl FormatRegistry for SimpleFormatRegistry {
    fn deserialize(&self, descriptor: Option<&FormatDescriptor>) -> Box<dyn Formatter> {
        let Some(descriptor) = descriptor else {
            return Box::new(StringFormatter);
        };
        match descriptor.kind.as_str() {
            "string" => Box::new(StringFormatter),
            "boolean" => Box::new(BooleanFormatter),
            "number" => {
                let decimals = descriptor
                    .params
                    .as_ref()
                    .and_then(|params| params.get("decimals"))
                    .and_then(serde_json::Value::as_u64)
                    .map_or(2, |d| u8::try_from(d.min(u64::from(u8::MAX))).unwrap_or(2));
                Box::new(NumberFormatter { decimals })
            }
            other => {
                log::warn!("unknown format kind '{other}', falling back to string");
                Box::new(StringFormatter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_formatter_fixes_decimals() {
        let f = NumberFormatter { decimals: 2 };
        assert_eq!(f.format(&json!(1024.5)), "1024.50");
        assert_eq!(f.format(&json!(7)), "7.00");
        assert_eq!(f.format(&json!("n/a")), "n/a");
    }

    #[test]
    fn boolean_formatter_handles_numbers() {
        let f = BooleanFormatter;
        assert_eq!(f.format(&json!(true)), "true");
        assert_eq!(f.format(&json!(0)), "false");
        assert_eq!(f.format(&json!(3)), "true");
        assert_eq!(f.format(&json!("yes")), "yes");
    }

    #[test]
    fn registry_defaults_for_absent_and_unknown() {
        let registry = SimpleFormatRegistry;
        assert_eq!(
            registry.deserialize(None).descriptor(),
            FormatDescriptor::new("string")
        );
        let unknown = FormatDescriptor::new("duration");
        assert_eq!(
            registry.deserialize(Some(&unknown)).descriptor(),
            FormatDescriptor::new("string")
        );
    }

    #[test]
    fn descriptors_round_trip_through_registry() {
        let registry = SimpleFormatRegistry;
        let descriptor = FormatDescriptor::with_params("number", json!({ "decimals": 4 }));
        let formatter = registry.deserialize(Some(&descriptor));
        assert_eq!(formatter.descriptor(), descriptor);
    }

    #[test]
    fn null_renders_as_placeholder() {
        assert_eq!(StringFormatter.format(&serde_json::Value::Null), "-");
    }
}
