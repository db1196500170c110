//! Call parameter normalization
//!
//! Contracts pass arguments either positionally or by name. The bridge
//! forwards exactly one of the two forms to the executor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments forwarded to the callee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallParams {
    /// Ordered arguments
    Positional(Vec<Value>),
    /// Keyword arguments
    Named(Map<String, Value>),
}

impl CallParams {
    /// Pick the parameter set to dispatch
    ///
    /// Positional arguments win when present, then named arguments; with
    /// neither, an empty positional set is used. Supplying both is accepted
    /// but logged, and the named set is dropped.
    pub fn resolve(positional: Option<Vec<Value>>, named: Option<Map<String, Value>>) -> Self {
        match (positional, named) {
            (Some(args), Some(kwargs)) => {
                tracing::warn!(
                    target: "intercall",
                    positional = args.len(),
                    named = kwargs.len(),
                    "Both positional and named params supplied; using positional"
                );
                Self::Positional(args)
            }
            (Some(args), None) => Self::Positional(args),
            (None, Some(kwargs)) => Self::Named(kwargs),
            (None, None) => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Positional(args) => args.len(),
            Self::Named(kwargs) => kwargs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl Default for CallParams {
    fn default() -> Self {
        Self::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for CallParams {
    fn from(args: Vec<Value>) -> Self {
        Self::Positional(args)
    }
}

impl From<Map<String, Value>> for CallParams {
    fn from(kwargs: Map<String, Value>) -> Self {
        Self::Named(kwargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_resolve_defaults_to_empty_positional() {
        let params = CallParams::resolve(None, None);
        assert_eq!(params, CallParams::Positional(vec![]));
        assert!(params.is_empty());
    }

    #[test]
    fn test_resolve_positional() {
        let params = CallParams::resolve(Some(vec![json!(1), json!("two")]), None);
        assert_eq!(params, CallParams::Positional(vec![json!(1), json!("two")]));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_resolve_named() {
        let kwargs = named(&[("_to", json!("hx01")), ("_value", json!(10))]);
        let params = CallParams::resolve(None, Some(kwargs.clone()));
        assert_eq!(params, CallParams::Named(kwargs));
        assert!(params.is_named());
    }

    #[test]
    fn test_resolve_both_prefers_positional() {
        let kwargs = named(&[("_value", json!(10))]);
        let params = CallParams::resolve(Some(vec![json!(5)]), Some(kwargs));
        assert_eq!(params, CallParams::Positional(vec![json!(5)]));
    }

    #[test]
    fn test_resolve_keeps_explicit_empty_positional() {
        let kwargs = named(&[("_value", json!(10))]);
        let params = CallParams::resolve(Some(vec![]), Some(kwargs));
        assert_eq!(params, CallParams::Positional(vec![]));
    }

    #[test]
    fn test_serialize_shapes() {
        let positional = CallParams::Positional(vec![json!(1)]);
        assert_eq!(serde_json::to_value(&positional).unwrap(), json!([1]));

        let kw = CallParams::Named(named(&[("a", json!(true))]));
        assert_eq!(serde_json::to_value(&kw).unwrap(), json!({"a": true}));
    }
}
