use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use ciarp_core::seed::seed_records;
use ciarp_core::{AggregateSnapshot, Analytics, ConversationRecord};
use serde::Deserialize;
use tracing::{debug, info};

// ── Errors ───────────────────────────────────────────────────────────

/// Failures building a store from external data. Queries never fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate conversation id '{0}'")]
    DuplicateId(String),
    #[error("conversation '{id}' has satisfaction {value}, expected 0.0..=5.0")]
    SatisfactionOutOfRange { id: String, value: f64 },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ── Filter criteria ──────────────────────────────────────────────────

/// Query filter. Set fields are ANDed together; empty strings count as unset.
///
/// `emotion` and `resolution` are compared by label, so an unknown value
/// matches nothing instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub day: Option<String>,
    pub emotion: Option<String>,
    pub intent: Option<String>,
    pub resolution: Option<String>,
    #[serde(alias = "q")]
    pub search_term: Option<String>,
}

impl FilterCriteria {
    fn set(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|s| !s.is_empty())
    }

    /// Build criteria from raw query pairs. A repeated key keeps its last
    /// value, `q` and `search_term` name the same field, and unknown keys
    /// are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut c = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "day" => &mut c.day,
                "emotion" => &mut c.emotion,
                "intent" => &mut c.intent,
                "resolution" => &mut c.resolution,
                "q" | "search_term" => &mut c.search_term,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        c
    }

    pub fn is_empty(&self) -> bool {
        Self::set(&self.day).is_none()
            && Self::set(&self.emotion).is_none()
            && Self::set(&self.intent).is_none()
            && Self::set(&self.resolution).is_none()
            && Self::set(&self.search_term).is_none()
    }

    pub fn matches(&self, record: &ConversationRecord) -> bool {
        if let Some(day) = Self::set(&self.day) {
            if record.day_label() != day {
                return false;
            }
        }
        if let Some(emotion) = Self::set(&self.emotion) {
            if record.emotion.as_str() != emotion {
                return false;
            }
        }
        if let Some(intent) = Self::set(&self.intent) {
            if record.intent != intent {
                return false;
            }
        }
        if let Some(resolution) = Self::set(&self.resolution) {
            if record.resolution.as_str() != resolution {
                return false;
            }
        }
        if let Some(term) = Self::set(&self.search_term) {
            let term = term.to_lowercase();
            let hit = [
                &record.customer_name,
                &record.agent_name,
                &record.intent,
                &record.transcript,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

// ── Store ────────────────────────────────────────────────────────────

type Materializer = Box<dyn Fn() -> Vec<ConversationRecord> + Send + Sync>;

/// Read-only set of conversation records.
///
/// Records are materialized on first access and never change afterward, so
/// a shared `&ConversationStore` can be read from any number of threads.
pub struct ConversationStore {
    records: OnceLock<Vec<ConversationRecord>>,
    materialize: Materializer,
}

impl ConversationStore {
    /// Store backed by the built-in seed set, materialized lazily.
    pub fn seeded() -> Self {
        Self::lazy(seed_records)
    }

    /// Store whose records come from `f`, called at most once.
    pub fn lazy(f: impl Fn() -> Vec<ConversationRecord> + Send + Sync + 'static) -> Self {
        Self {
            records: OnceLock::new(),
            materialize: Box::new(f),
        }
    }

    /// Store over an explicit record list. Ids must be unique and
    /// satisfaction scores within 0.0..=5.0.
    pub fn from_records(records: Vec<ConversationRecord>) -> Result<Self, StoreError> {
        validate(&records)?;
        Ok(Self {
            records: OnceLock::from(records),
            materialize: Box::new(Vec::<ConversationRecord>::new),
        })
    }

    /// Load a JSON array of records from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: shown.clone(),
            source,
        })?;
        let records: Vec<ConversationRecord> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: shown.clone(),
                source,
            })?;
        info!(path = %shown, count = records.len(), "loaded conversation records");
        Self::from_records(records)
    }

    pub fn is_materialized(&self) -> bool {
        self.records.get().is_some()
    }

    /// All records in insertion order.
    pub fn load_all(&self) -> &[ConversationRecord] {
        self.records.get_or_init(|| {
            let records = (self.materialize)();
            info!(count = records.len(), "materialized conversation set");
            records
        })
    }

    /// Records matching every set field of `criteria`, in insertion order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<ConversationRecord> {
        let out: Vec<ConversationRecord> = self
            .load_all()
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        debug!(?criteria, matched = out.len(), "filter");
        out
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ConversationRecord> {
        self.load_all().iter().find(|r| r.id == id)
    }

    pub fn summarize(&self) -> AggregateSnapshot {
        AggregateSnapshot::from_records(self.load_all())
    }

    pub fn analytics(&self) -> Analytics {
        Analytics::from_records(self.load_all())
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn validate(records: &[ConversationRecord]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id.as_str()) {
            return Err(StoreError::DuplicateId(r.id.clone()));
        }
        if !(0.0..=5.0).contains(&r.satisfaction) {
            return Err(StoreError::SatisfactionOutOfRange {
                id: r.id.clone(),
                value: r.satisfaction,
            });
        }
    }
    Ok(())
}

// ── Human-readable formatting ────────────────────────────────────────

/// One line per record: id, day, customer/agent, intent, emotion, outcome.
pub fn format_records(records: &[ConversationRecord]) -> String {
    if records.is_empty() {
        return "No conversations match the filter.\n".to_string();
    }
    let mut out = String::new();
    for r in records {
        out.push_str(&format!(
            "  [{}] day {}  {} / {}  {}  ({}, {}, {:.1})\n",
            r.id,
            r.day_label(),
            r.customer_name,
            r.agent_name,
            r.intent,
            r.emotion.as_str(),
            r.resolution.as_str(),
            r.satisfaction
        ));
    }
    out.push_str(&format!("\n({} conversations)\n", records.len()));
    out
}

/// Full detail view of one record.
pub fn format_record(r: &ConversationRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("── Conversation {} ─────────────────────\n", r.id));
    out.push_str(&format!("  customer: {}\n  agent:    {}\n", r.customer_name, r.agent_name));
    out.push_str(&format!(
        "  when:     {} ({}s)\n",
        r.timestamp, r.duration_secs
    ));
    out.push_str(&format!(
        "  intent:   {}\n  emotion:  {}\n  outcome:  {}\n  csat:     {:.1}\n\n",
        r.intent,
        r.emotion.as_str(),
        r.resolution.as_str(),
        r.satisfaction
    ));
    out.push_str("── Summary ────────────────────────────\n");
    out.push_str(&format!("  {}\n\n", r.summary));
    out.push_str("── Transcript ─────────────────────────\n");
    for line in r.transcript.lines().filter(|l| !l.is_empty()) {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

pub fn format_snapshot(snap: &AggregateSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total conversations: {}\n\n", snap.total_count));

    out.push_str("── By day ─────────────────────────────\n");
    for (day, n) in &snap.counts_by_day {
        out.push_str(&format!("  {day:>7}  {n}\n"));
    }
    out.push_str("\n── By emotion ─────────────────────────\n");
    for (emotion, n) in &snap.counts_by_emotion {
        out.push_str(&format!("  {:>10}  {n}\n", emotion.as_str()));
    }
    out.push_str("\n── By intent ──────────────────────────\n");
    for (intent, n) in &snap.counts_by_intent {
        out.push_str(&format!("  {intent:>17}  {n}\n"));
    }
    out.push_str("\n── By resolution ──────────────────────\n");
    for (resolution, n) in &snap.counts_by_resolution {
        out.push_str(&format!("  {:>9}  {n}\n", resolution.as_str()));
    }
    out
}

pub fn format_analytics(a: &Analytics) -> String {
    fn or_dash<T: std::fmt::Display>(v: Option<T>, suffix: &str) -> String {
        v.map_or_else(|| "—".to_string(), |v| format!("{v}{suffix}"))
    }
    format!(
        "Conversations:    {}\nResolution rate:  {}\nAvg duration:     {}\nAvg satisfaction: {}\n",
        a.total_conversations,
        or_dash(a.resolution_rate, "%"),
        or_dash(a.avg_duration_secs, "s"),
        or_dash(a.avg_satisfaction, " / 5.0"),
    )
}

// ── Tests ────────────────────────────────────────────────────────────
