use crate::{AssistError, Prompt, TextGenerator};

/// Offline responder: picks a fixed reply by keyword.
///
/// Used when no provider key is configured so the assistant stays usable in
/// demos and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Analysis,
    Suggestion,
    Insight,
    General,
}

pub fn classify(message: &str) -> ReplyKind {
    let q = message.to_lowercase();
    if q.contains("analyze") || q.contains("analysis") {
        ReplyKind::Analysis
    } else if q.contains("improve") || q.contains("optimization") {
        ReplyKind::Suggestion
    } else if q.contains("trend") || q.contains("pattern") {
        ReplyKind::Insight
    } else {
        ReplyKind::General
    }
}

impl TextGenerator for CannedGenerator {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn generate(&self, prompt: &Prompt) -> Result<String, AssistError> {
        let domain = &prompt.domain;
        let text = match classify(&prompt.message) {
            ReplyKind::Analysis => format!(
                "Based on the {domain} conversation data, I've identified several key patterns:

- **Emotion Trends**: 45% of customers start calm but 25% become frustrated during technical discussions
- **Resolution Patterns**: Technical issues have a 67% first-call resolution rate, below the 85% target
- **Peak Issues**: GPS navigation problems account for 34% of technical support calls

**Recommendations**:
1. Implement proactive GPS troubleshooting scripts
2. Provide agents with updated technical documentation
3. Consider escalation protocols for complex technical issues"
            ),
            ReplyKind::Suggestion => format!(
                "Here are AI-powered optimization suggestions for your {domain} operations:

**Immediate Actions**:
- Deploy auto-resolution templates for common GPS issues (potential 23% reduction in handle time)
- Update agent scripts with empathy phrases for frustrated customers
- Implement proactive callbacks for escalated technical issues

**Strategic Improvements**:
- Cross-train agents on yacht technical specifications
- Develop predictive models for customer satisfaction
- Create domain-specific knowledge base articles

**Expected Impact**: 15-20% improvement in resolution rates, 0.8-point increase in satisfaction scores"
            ),
            ReplyKind::Insight => "I've detected several important trends in your conversation data:

**Rising Trends**:
- Technical support requests (+34% this week)
- Premium product inquiries (+18% month-over-month)
- Scheduling requests for yacht viewings (+25%)

**Concerning Patterns**:
- Increased escalation rate for GPS-related issues
- Longer handle times for return requests
- Customer confusion about product specifications

**Opportunities**:
- High conversion potential for luxury yacht inquiries
- Strong satisfaction scores for resolved order issues
- Effective cross-selling during product inquiries"
                .to_string(),
            ReplyKind::General => "I can help you with various conversation intelligence tasks:

**Analysis Capabilities**:
- Conversation sentiment and emotion analysis
- Intent classification and pattern recognition
- Performance metrics and trend identification
- Cross-domain intelligence insights

**Optimization Features**:
- Auto-resolution template suggestions
- Agent coaching recommendations
- Customer satisfaction improvement strategies
- Predictive analytics for escalation prevention

Try asking me to \"analyze recent trends\" or \"suggest improvements for technical support calls\""
                .to_string(),
        };
        Ok(text)
    }
}
