use serde::Serialize;

/// Auto vs manual split for one inquiry category. `auto + manual == 100`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResolution {
    pub category: &'static str,
    /// Percent handled without an agent.
    pub auto: u8,
    pub manual: u8,
    pub total: u32,
}

/// A canned response the engine can send, with usage and success stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionTemplate {
    pub name: &'static str,
    pub usage: u32,
    /// Percent.
    pub success: u8,
    pub response: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPoint {
    pub week: &'static str,
    pub accuracy: u8,
    pub confidence: u8,
}

/// Monthly savings attributed to automation, in dollars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSaving {
    pub name: &'static str,
    pub value: u32,
}

/// Weighted totals across all categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoResolutionTotals {
    pub total_conversations: u32,
    /// Rounded count of conversations resolved automatically.
    pub auto_resolved: u64,
    /// Volume-weighted auto-resolution percent; `None` when there is no volume.
    pub overall_auto_rate: Option<u32>,
    pub monthly_savings: u32,
}

impl AutoResolutionTotals {
    pub fn compute(categories: &[CategoryResolution], savings: &[CostSaving]) -> Self {
        let total: u32 = categories.iter().map(|c| c.total).sum();
        let auto: f64 = categories
            .iter()
            .map(|c| f64::from(c.total) * f64::from(c.auto) / 100.0)
            .sum();
        let overall_auto_rate = if total == 0 {
            None
        } else {
            Some((auto / f64::from(total) * 100.0).round() as u32)
        };
        Self {
            total_conversations: total,
            auto_resolved: auto.round() as u64,
            overall_auto_rate,
            monthly_savings: savings.iter().map(|s| s.value).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoResolutionReport {
    pub categories: Vec<CategoryResolution>,
    pub templates: Vec<ResolutionTemplate>,
    pub learning: Vec<LearningPoint>,
    pub savings: Vec<CostSaving>,
    #[serde(flatten)]
    pub totals: AutoResolutionTotals,
}

impl AutoResolutionReport {
    pub fn new(
        categories: Vec<CategoryResolution>,
        templates: Vec<ResolutionTemplate>,
        learning: Vec<LearningPoint>,
        savings: Vec<CostSaving>,
    ) -> Self {
        let totals = AutoResolutionTotals::compute(&categories, &savings);
        Self {
            categories,
            templates,
            learning,
            savings,
            totals,
        }
    }

    pub fn template(&self, name: &str) -> Option<&ResolutionTemplate> {
        self.templates.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

impl Default for AutoResolutionReport {
    fn default() -> Self {
        auto_resolution()
    }
}

fn category(category: &'static str, auto: u8, total: u32) -> CategoryResolution {
    CategoryResolution {
        category,
        auto,
        manual: 100 - auto,
        total,
    }
}

/// The built-in auto-resolution dataset.
pub fn auto_resolution() -> AutoResolutionReport {
    let categories = vec![
        category("Order Status", 95, 234),
        category("Returns", 78, 189),
        category("Shipping Info", 92, 156),
        category("Product Info", 88, 143),
        category("Technical Support", 45, 98),
        category("Billing", 82, 87),
    ];
    let templates = vec![
        ResolutionTemplate {
            name: "Order Status",
            usage: 45,
            success: 94,
            response: "Thank you for contacting us about your order. I can see that your order \
                #{order_number} was placed on {order_date} and is currently {status}. \
                {if_shipped}Your tracking number is {tracking_number} and you can expect delivery by \
                {delivery_date}. {endif}Is there anything else I can help you with regarding your order?",
        },
        ResolutionTemplate {
            name: "Return Policy",
            usage: 32,
            success: 89,
            response: "I understand you'd like to return an item. Our return policy allows returns \
                within 30 days of purchase for a full refund. The item should be in original condition \
                with all packaging. I can help you start the return process right now. Would you like \
                me to generate a return label for you?",
        },
        ResolutionTemplate {
            name: "Shipping Info",
            usage: 28,
            success: 96,
            response: "For shipping information, we offer several options: Standard shipping (5-7 \
                business days), Express shipping (2-3 business days), and Overnight shipping. Shipping \
                costs vary by location and item weight. Would you like me to calculate shipping costs \
                for your specific order?",
        },
        ResolutionTemplate {
            name: "Product Specs",
            usage: 24,
            success: 87,
            response: "I'd be happy to provide detailed specifications for {product_name}. \
                {product_specs} You can find the complete technical documentation in our product \
                manual. Would you like me to send you the detailed specification sheet?",
        },
        ResolutionTemplate {
            name: "Refund Process",
            usage: 19,
            success: 91,
            response: "I can help you with the refund process. Once we receive your returned item and \
                it passes our quality check, your refund will be processed within 3-5 business days to \
                your original payment method. You'll receive an email confirmation once the refund is \
                initiated.",
        },
    ];
    let learning = [
        ("Week 1", 72, 68),
        ("Week 2", 76, 71),
        ("Week 3", 81, 75),
        ("Week 4", 85, 79),
        ("Week 5", 87, 82),
        ("Week 6", 89, 85),
    ]
    .into_iter()
    .map(|(week, accuracy, confidence)| LearningPoint {
        week,
        accuracy,
        confidence,
    })
    .collect();
    let savings = vec![
        CostSaving {
            name: "Agent Time Saved",
            value: 1240,
        },
        CostSaving {
            name: "Faster Resolution",
            value: 890,
        },
        CostSaving {
            name: "Reduced Escalations",
            value: 560,
        },
        CostSaving {
            name: "24/7 Availability",
            value: 340,
        },
    ];
    AutoResolutionReport::new(categories, templates, learning, savings)
}
