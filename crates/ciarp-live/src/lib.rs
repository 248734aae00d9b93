//! Simulated live-call monitor.
//!
//! The monitor holds a handful of active calls plus headline metrics and is
//! advanced by [`LiveMonitor::tick`]. All randomness comes from the caller, so a
//! seeded RNG replays the same sequence of states.

use std::sync::Arc;
use std::time::Duration;

use ciarp_core::Emotion;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default interval between ticks.
pub const DEFAULT_TICK: Duration = Duration::from_secs(3);

pub const AGENT_SUGGESTIONS: [&str; 4] = [
    "Customer seems frustrated about delivery delay. Offer expedited shipping at no cost.",
    "Mention our 30-day return policy to reassure the customer.",
    "Customer is interested in premium features. Consider upselling.",
    "Technical issue detected. Transfer to Level 2 support if needed.",
];

// ── Types ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Active,
    OnHold,
    Escalated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCall {
    pub id: String,
    pub customer_name: String,
    pub agent_name: String,
    pub duration_secs: u64,
    pub emotion: Emotion,
    pub intent: String,
    pub urgency: Urgency,
    pub status: CallStatus,
    /// Classifier confidence, 0.0..=1.0.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveMetrics {
    pub total_active: u32,
    pub avg_wait_secs: u32,
    /// Percent.
    pub resolution_rate: u32,
    /// Percent.
    pub escalation_rate: u32,
}

impl Default for LiveMetrics {
    fn default() -> Self {
        Self {
            total_active: 12,
            avg_wait_secs: 23,
            resolution_rate: 87,
            escalation_rate: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMonitor {
    pub calls: Vec<ActiveCall>,
    pub metrics: LiveMetrics,
    pub tick_count: u64,
}

impl Default for LiveMonitor {
    fn default() -> Self {
        Self {
            calls: seed_calls(),
            metrics: LiveMetrics::default(),
            tick_count: 0,
        }
    }
}

impl LiveMonitor {
    /// Advance one step: every call grows by 1–5 s, active count drifts by
    /// −1..=+1 and average wait by −3..=+2, both floored at zero.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for call in &mut self.calls {
            call.duration_secs += rng.gen_range(1..=5);
        }
        let m = &mut self.metrics;
        m.total_active = drift(m.total_active, rng.gen_range(-1..=1));
        m.avg_wait_secs = drift(m.avg_wait_secs, rng.gen_range(-3..=2));
        self.tick_count += 1;
        debug!(
            tick = self.tick_count,
            total_active = m.total_active,
            avg_wait_secs = m.avg_wait_secs,
            "live monitor tick"
        );
    }

    /// One agent-assist suggestion, chosen at random.
    pub fn suggestion<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        AGENT_SUGGESTIONS
            .choose(rng)
            .copied()
            .unwrap_or(AGENT_SUGGESTIONS[0])
    }
}

fn drift(value: u32, delta: i32) -> u32 {
    value.saturating_add_signed(delta)
}

/// Shared handle the ticker writes and request handlers read.
pub type SharedMonitor = Arc<RwLock<LiveMonitor>>;

/// Tick `monitor` every `period` until the returned handle is aborted.
/// The first tick happens one full period after spawning.
pub fn spawn_ticker<R>(monitor: SharedMonitor, period: Duration, mut rng: R) -> JoinHandle<()>
where
    R: Rng + Send + 'static,
{
    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + period;
        let mut interval = tokio::time::interval_at(start, period);
        loop {
            interval.tick().await;
            monitor.write().await.tick(&mut rng);
        }
    })
}

fn call(
    id: &str,
    customer: &str,
    agent: &str,
    duration_secs: u64,
    emotion: Emotion,
    intent: &str,
    urgency: Urgency,
    status: CallStatus,
    confidence: f64,
) -> ActiveCall {
    ActiveCall {
        id: id.to_string(),
        customer_name: customer.to_string(),
        agent_name: agent.to_string(),
        duration_secs,
        emotion,
        intent: intent.to_string(),
        urgency,
        status,
        confidence,
    }
}

pub fn seed_calls() -> Vec<ActiveCall> {
    vec![
        call(
            "1",
            "Sarah Johnson",
            "Mike Chen",
            245,
            Emotion::Frustrated,
            "Return Request",
            Urgency::High,
            CallStatus::Active,
            0.89,
        ),
        call(
            "2",
            "Robert Davis",
            "Lisa Park",
            120,
            Emotion::Calm,
            "Order Status",
            Urgency::Low,
            CallStatus::Active,
            0.95,
        ),
        call(
            "3",
            "Emily Wilson",
            "John Smith",
            67,
            Emotion::Excited,
            "Product Inquiry",
            Urgency::Medium,
            CallStatus::Active,
            0.92,
        ),
        call(
            "4",
            "David Brown",
            "Anna Lee",
            189,
            Emotion::Confused,
            "Technical Support",
            Urgency::Medium,
            CallStatus::OnHold,
            0.78,
        ),
    ]
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_state_matches_dashboard() {
        let m = LiveMonitor::default();
        assert_eq!(m.calls.len(), 4);
        assert_eq!(m.metrics.total_active, 12);
        assert_eq!(m.metrics.avg_wait_secs, 23);
        assert_eq!(m.tick_count, 0);
    }

    #[test]
    fn tick_is_deterministic_for_a_seed() {
        let mut a = LiveMonitor::default();
        let mut b = LiveMonitor::default();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            a.tick(&mut rng_a);
            b.tick(&mut rng_b);
        }
        assert_eq!(a, b);
        assert_eq!(a.tick_count, 20);
    }

    #[test]
    fn tick_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = LiveMonitor::default();
        for _ in 0..500 {
            let before = m.clone();
            m.tick(&mut rng);
            for (old, new) in before.calls.iter().zip(&m.calls) {
                let grew = new.duration_secs - old.duration_secs;
                assert!((1..=5).contains(&grew));
            }
            let da = i64::from(m.metrics.total_active) - i64::from(before.metrics.total_active);
            let dw = i64::from(m.metrics.avg_wait_secs) - i64::from(before.metrics.avg_wait_secs);
            assert!((-1..=1).contains(&da));
            assert!((-3..=2).contains(&dw));
            assert_eq!(m.metrics.resolution_rate, 87);
            assert_eq!(m.metrics.escalation_rate, 8);
        }
    }

    #[test]
    fn metrics_never_go_negative() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut m = LiveMonitor::default();
        m.metrics.total_active = 0;
        m.metrics.avg_wait_secs = 0;
        for _ in 0..200 {
            m.tick(&mut rng);
        }
        assert!(m.metrics.total_active < 1000);
        assert_eq!(drift(0, -1), 0);
        assert_eq!(drift(2, -3), 0);
        assert_eq!(drift(5, 2), 7);
    }

    #[test]
    fn suggestion_comes_from_catalogue() {
        let m = LiveMonitor::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert!(AGENT_SUGGESTIONS.contains(&m.suggestion(&mut rng)));
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_value(CallStatus::OnHold).unwrap();
        assert_eq!(json, "on-hold");
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_advances_shared_monitor() {
        let shared: SharedMonitor = Arc::new(RwLock::new(LiveMonitor::default()));
        let handle = spawn_ticker(
            shared.clone(),
            Duration::from_secs(3),
            StdRng::seed_from_u64(9),
        );

        tokio::time::sleep(Duration::from_millis(9_500)).await;
        assert_eq!(shared.read().await.tick_count, 3);

        handle.abort();
        let _ = handle.await;
        let after = shared.read().await.tick_count;
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(shared.read().await.tick_count, after);

        let mut expected = LiveMonitor::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..after {
            expected.tick(&mut rng);
        }
        assert_eq!(*shared.read().await, expected);
    }
}
