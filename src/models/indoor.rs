use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndoorTempRecord {
    /// Local (Asia/Taipei) time, "YYYY-MM-DD HH:MM:SS".
    #[serde(rename = "tw_time")]
    pub local_time: String,
    /// Local hour, 0..=23.
    pub hour: u32,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(rename = "indoor_temp")]
    pub indoor_temperature: f64,
}

/// Records keyed by the forecast's original UTC end-timestamp, in input order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndoorTempReport {
    entries: Vec<(String, IndoorTempRecord)>,
}

impl IndoorTempReport {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    /// A key seen before keeps its position and takes the new record.
    pub fn insert(&mut self, key: String, record: IndoorTempRecord) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((key, record)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&IndoorTempRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, r)| r)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndoorTempRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for IndoorTempReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}
