//! # Config Commands
//!
//! Commands for retrieving editor configuration.

use tracing::debug;

use crate::state::EditorConfig;

/// Gets the current editor configuration.
///
/// ## When Used
/// - Editor startup (currency display)
/// - "Add Item" form (category placeholder)
pub fn get_config(config: &EditorConfig) -> EditorConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_wire_shape() {
        let json = serde_json::to_value(get_config(&EditorConfig::default())).unwrap();
        assert_eq!(json["currencySymbol"], "$");
        assert_eq!(json["currencyDecimals"], 2);
        assert_eq!(json["defaultItemCategory"], "General");
        assert_eq!(json["seedDefaultTiers"], false);
    }
}
