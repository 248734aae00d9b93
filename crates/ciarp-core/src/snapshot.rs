use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ConversationRecord, Emotion, Resolution};

/// Counts derived from a full record set.
///
/// Emotion and resolution maps always carry every variant, zero-initialized,
/// so each of them (and the day map) sums to `total_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateSnapshot {
    pub total_count: usize,
    pub counts_by_day: BTreeMap<String, usize>,
    pub counts_by_emotion: BTreeMap<Emotion, usize>,
    pub counts_by_intent: BTreeMap<String, usize>,
    pub counts_by_resolution: BTreeMap<Resolution, usize>,
}

impl AggregateSnapshot {
    pub fn from_records(records: &[ConversationRecord]) -> Self {
        let mut counts_by_emotion: BTreeMap<Emotion, usize> =
            Emotion::ALL.into_iter().map(|e| (e, 0)).collect();
        let mut counts_by_resolution: BTreeMap<Resolution, usize> =
            Resolution::ALL.into_iter().map(|r| (r, 0)).collect();
        let mut counts_by_day = BTreeMap::new();
        let mut counts_by_intent = BTreeMap::new();

        for r in records {
            *counts_by_day.entry(r.day_label()).or_insert(0) += 1;
            *counts_by_emotion.entry(r.emotion).or_insert(0) += 1;
            *counts_by_intent.entry(r.intent.clone()).or_insert(0) += 1;
            *counts_by_resolution.entry(r.resolution).or_insert(0) += 1;
        }

        Self {
            total_count: records.len(),
            counts_by_day,
            counts_by_emotion,
            counts_by_intent,
            counts_by_resolution,
        }
    }

    pub fn emotion_count(&self, emotion: Emotion) -> usize {
        self.counts_by_emotion.get(&emotion).copied().unwrap_or(0)
    }

    pub fn resolution_count(&self, resolution: Resolution) -> usize {
        self.counts_by_resolution.get(&resolution).copied().unwrap_or(0)
    }
}

/// Headline dashboard figures.
///
/// Rates and averages are `None` for an empty record set rather than NaN.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub total_conversations: usize,
    /// Resolved share as a rounded integer percentage.
    pub resolution_rate: Option<u32>,
    pub avg_duration_secs: Option<u64>,
    /// Mean satisfaction rounded to one decimal.
    pub avg_satisfaction: Option<f64>,
    pub emotion_distribution: BTreeMap<Emotion, usize>,
    pub intent_distribution: BTreeMap<String, usize>,
    pub conversations_by_day: BTreeMap<String, usize>,
}

impl Analytics {
    pub fn from_records(records: &[ConversationRecord]) -> Self {
        let snap = AggregateSnapshot::from_records(records);
        let total = snap.total_count;

        let (resolution_rate, avg_duration_secs, avg_satisfaction) = if total == 0 {
            (None, None, None)
        } else {
            let n = total as f64;
            let resolved = snap.resolution_count(Resolution::Resolved) as f64;
            let duration: u64 = records.iter().map(|r| r.duration_secs).sum();
            let satisfaction: f64 = records.iter().map(|r| r.satisfaction).sum();
            (
                Some((resolved / n * 100.0).round() as u32),
                Some((duration as f64 / n).round() as u64),
                Some((satisfaction / n * 10.0).round() / 10.0),
            )
        };

        Self {
            total_conversations: total,
            resolution_rate,
            avg_duration_secs,
            avg_satisfaction,
            emotion_distribution: snap.counts_by_emotion,
            intent_distribution: snap.counts_by_intent,
            conversations_by_day: snap.counts_by_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    #[test]
    fn seed_snapshot_counts() {
        let records = seed_records();
        let snap = AggregateSnapshot::from_records(&records);
        assert_eq!(snap.total_count, 7);
        assert_eq!(snap.resolution_count(Resolution::Resolved), 6);
        assert_eq!(snap.resolution_count(Resolution::Escalated), 1);
        assert_eq!(snap.resolution_count(Resolution::Pending), 0);
        assert_eq!(snap.emotion_count(Emotion::Frustrated), 2);
        assert_eq!(snap.emotion_count(Emotion::Confused), 2);
        assert_eq!(snap.emotion_count(Emotion::Calm), 2);
        assert_eq!(snap.emotion_count(Emotion::Excited), 1);
        assert_eq!(snap.counts_by_intent["Technical Support"], 2);
        assert_eq!(snap.counts_by_day.len(), 7);
        assert_eq!(snap.counts_by_day["18"], 1);
    }

    #[test]
    fn snapshot_sums_match_total() {
        let snap = AggregateSnapshot::from_records(&seed_records());
        let total = snap.total_count;
        assert_eq!(snap.counts_by_emotion.values().sum::<usize>(), total);
        assert_eq!(snap.counts_by_resolution.values().sum::<usize>(), total);
        assert_eq!(snap.counts_by_day.values().sum::<usize>(), total);
        assert_eq!(snap.counts_by_intent.values().sum::<usize>(), total);
    }

    #[test]
    fn empty_snapshot_keeps_all_enum_keys() {
        let snap = AggregateSnapshot::from_records(&[]);
        assert_eq!(snap.total_count, 0);
        assert_eq!(snap.counts_by_emotion.len(), 4);
        assert_eq!(snap.counts_by_resolution.len(), 3);
        assert!(snap.counts_by_emotion.values().all(|&c| c == 0));
        assert!(snap.counts_by_day.is_empty());
        assert!(snap.counts_by_intent.is_empty());
    }

    #[test]
    fn snapshot_serializes_enum_keys_as_labels() {
        let snap = AggregateSnapshot::from_records(&seed_records());
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["counts_by_resolution"]["resolved"], 6);
        assert_eq!(json["counts_by_emotion"]["excited"], 1);
    }

    #[test]
    fn seed_analytics() {
        let a = Analytics::from_records(&seed_records());
        assert_eq!(a.total_conversations, 7);
        // 6 / 7 = 85.7%
        assert_eq!(a.resolution_rate, Some(86));
        // 850 s over 7 calls
        assert_eq!(a.avg_duration_secs, Some(121));
        assert_eq!(a.avg_satisfaction, Some(4.3));
    }

    #[test]
    fn empty_analytics_has_no_rates() {
        let a = Analytics::from_records(&[]);
        assert_eq!(a.total_conversations, 0);
        assert_eq!(a.resolution_rate, None);
        assert_eq!(a.avg_duration_secs, None);
        assert_eq!(a.avg_satisfaction, None);
        let json = serde_json::to_value(&a).unwrap();
        assert!(json["resolution_rate"].is_null());
    }
}
