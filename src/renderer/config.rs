use serde::Deserialize;

/// Output options for [`Renderer`](super::Renderer).
///
/// Loadable from any serde format; missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Put each clause on its own line.
    pub pretty: bool,
    /// Back-quote every symbolic name, even plain identifiers.
    pub always_escape_names: bool,
}

impl RenderConfig {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub(crate) fn clause_separator(&self) -> &'static str {
        if self.pretty { "\n" } else { " " }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert_eq!(config, RenderConfig::pretty());
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
