use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Trend,
    Alert,
    Opportunity,
    Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A static insight card shown next to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Percent.
    pub confidence: u8,
    pub impact: Impact,
    pub actionable: bool,
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "1",
            kind: InsightKind::Trend,
            title: "Rising Technical Support Requests",
            description: "GPS navigation issues have increased 34% this week, particularly with MarineNav Pro models.",
            confidence: 92,
            impact: Impact::High,
            actionable: true,
        },
        Insight {
            id: "2",
            kind: InsightKind::Opportunity,
            title: "Upselling Opportunity Detected",
            description: "Customers asking about basic models show 67% interest in premium features when mentioned.",
            confidence: 85,
            impact: Impact::Medium,
            actionable: true,
        },
        Insight {
            id: "3",
            kind: InsightKind::Alert,
            title: "Customer Satisfaction Dip",
            description: "Satisfaction scores for return requests dropped to 3.8/5.0, below the 4.2 target.",
            confidence: 88,
            impact: Impact::High,
            actionable: true,
        },
        Insight {
            id: "4",
            kind: InsightKind::Recommendation,
            title: "Agent Training Suggestion",
            description: "Agents handling technical calls could benefit from updated GPS troubleshooting protocols.",
            confidence: 79,
            impact: Impact::Medium,
            actionable: true,
        },
    ]
}
