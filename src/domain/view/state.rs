//! View state containers — app-owned, SDK-provided update logic.

use super::View;
use serde_json::Value;

/// The latest successfully fetched payload for one view.
///
/// There is no staleness tracking: the bucket holds whatever the last successful
/// fetch returned until the next one overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataBucket {
    pub view: View,
    payload: Option<Value>,
    fetch_count: u64,
}

impl DataBucket {
    pub fn new(view: View) -> Self {
        Self {
            view,
            payload: None,
            fetch_count: 0,
        }
    }

    /// Replace the payload in full. No merge with the previous value.
    pub fn replace(&mut self, payload: Value) {
        self.payload = Some(payload);
        self.fetch_count += 1;
    }

    /// The stored payload, or the view's empty value if never fetched.
    pub fn value(&self) -> Value {
        self.payload
            .clone()
            .unwrap_or_else(|| self.view.empty_payload())
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn is_populated(&self) -> bool {
        self.payload.is_some()
    }

    /// Number of successful overwrites since the session started.
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count
    }

    /// JSON with two-space indentation, as shown in the tab body.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.value()).unwrap_or_default()
    }
}

/// One bucket per view, indexed by [`View`].
#[derive(Debug, Clone, PartialEq)]
pub struct Buckets([DataBucket; 3]);

impl Default for Buckets {
    fn default() -> Self {
        Self(View::ALL.map(DataBucket::new))
    }
}

impl Buckets {
    pub fn get(&self, view: View) -> &DataBucket {
        &self.0[view.index()]
    }

    pub fn get_mut(&mut self, view: View) -> &mut DataBucket {
        &mut self.0[view.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataBucket> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_bucket_uses_view_default() {
        let bucket = DataBucket::new(View::Profile);
        assert!(!bucket.is_populated());
        assert_eq!(bucket.value(), json!({}));
        assert_eq!(bucket.fetch_count(), 0);
    }

    #[test]
    fn test_replace_overwrites_without_merge() {
        let mut bucket = DataBucket::new(View::Profile);
        bucket.replace(json!({"name": "a", "email": "a@x"}));
        bucket.replace(json!({"name": "b"}));
        assert_eq!(bucket.value(), json!({"name": "b"}));
        assert_eq!(bucket.fetch_count(), 2);
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let mut bucket = DataBucket::new(View::OrderBook);
        bucket.replace(json!({"bids": []}));
        assert_eq!(bucket.pretty(), "{\n  \"bids\": []\n}");
    }

    #[test]
    fn test_buckets_are_independent() {
        let mut buckets = Buckets::default();
        buckets
            .get_mut(View::OrderBook)
            .replace(json!({"bids": [], "asks": []}));
        assert!(buckets.get(View::OrderBook).is_populated());
        assert!(!buckets.get(View::TradeBook).is_populated());
        assert!(!buckets.get(View::Profile).is_populated());
        let views: Vec<_> = buckets.iter().map(|b| b.view).collect();
        assert_eq!(views, View::ALL.to_vec());
    }
}
