//! Built-in yacht-brokerage conversation set.

use crate::types::{ConversationRecord, DialogSegment, Emotion, Party, Resolution};

struct Seed {
    id: &'static str,
    uuid: &'static str,
    customer: &'static str,
    agent: &'static str,
    timestamp: &'static str,
    recording_start: &'static str,
    duration_secs: u64,
    intent: &'static str,
    emotion: Emotion,
    resolution: Resolution,
    satisfaction: f64,
    transcript: &'static str,
    summary: &'static str,
}

impl Seed {
    fn into_record(self) -> ConversationRecord {
        ConversationRecord {
            id: self.id.to_string(),
            uuid: self.uuid.to_string(),
            customer_name: self.customer.to_string(),
            agent_name: self.agent.to_string(),
            timestamp: self.timestamp.to_string(),
            duration_secs: self.duration_secs,
            intent: self.intent.to_string(),
            emotion: self.emotion,
            resolution: self.resolution,
            satisfaction: self.satisfaction,
            transcript: self.transcript.to_string(),
            summary: self.summary.to_string(),
            parties: vec![
                Party {
                    name: self.customer.to_string(),
                    role: "customer".to_string(),
                    tel: None,
                    mailto: None,
                },
                Party {
                    name: self.agent.to_string(),
                    role: "agent".to_string(),
                    tel: None,
                    mailto: None,
                },
            ],
            dialog: vec![DialogSegment {
                kind: "recording".to_string(),
                start: self.recording_start.to_string(),
                duration_secs: self.duration_secs as f64,
            }],
        }
    }
}

/// Materialize the seven seed conversations in insertion order.
pub fn seed_records() -> Vec<ConversationRecord> {
    let mut records: Vec<ConversationRecord> = seeds().into_iter().map(Seed::into_record).collect();

    // The first call carries full contact details and a precise recording length.
    if let Some(first) = records.first_mut() {
        first.parties[0].tel = Some("+15065738249".to_string());
        first.parties[0].mailto = Some("julie.kelly@gmail.com".to_string());
        first.parties[1].tel = Some("+15004171355".to_string());
        first.parties[1].mailto = Some("david.rogers@brokeragecompany.com".to_string());
        first.dialog[0].duration_secs = 43.056;
    }
    records
}

fn seeds() -> Vec<Seed> {
    vec![
        Seed {
            id: "1",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d739c",
            customer: "Julie Kelly",
            agent: "David Rogers",
            timestamp: "2025-05-18T15:20:08-04:00",
            recording_start: "2025-05-18T15:19:53-04:00",
            duration_secs: 43,
            intent: "Order Issue",
            emotion: Emotion::Frustrated,
            resolution: Resolution::Resolved,
            satisfaction: 4.2,
            transcript: "Agent: Hello, this is David Rogers, how can I help you today?\n\n\
                Customer: Hi David, my name is Julie Kelly. I received the wrong item in my order, and I wanted to get this sorted out.\n\n\
                Agent: I'm sorry to hear that, Julie. Let's get this resolved for you. Could you provide me with the order number, please?\n\n\
                Customer: Sure, the order number is 2345.\n\n\
                Agent: Thank you. Could you also let me know the item you received and the item you were expecting?\n\n\
                Customer: I received a yacht anchor, but I was expecting a navigation system.\n\n\
                Agent: I apologize for the mix-up, Julie. I will ensure we get the correct navigation system sent to you right away.\n\n\
                Customer: Thank you very much for bringing this to our attention, Julie. We appreciate your patience and trust in us. Have a great day!",
            summary: "Customer received wrong item (yacht anchor instead of navigation system). Agent processed replacement order and resolved issue satisfactorily.",
        },
        Seed {
            id: "2",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d740c",
            customer: "Michael Thompson",
            agent: "Sarah Wilson",
            timestamp: "2025-05-19T14:15:22-04:00",
            recording_start: "2025-05-19T14:15:22-04:00",
            duration_secs: 127,
            intent: "Technical Support",
            emotion: Emotion::Confused,
            resolution: Resolution::Escalated,
            satisfaction: 3.8,
            transcript: "Agent: Hi, this is Sarah from technical support. How can I assist you today?\n\n\
                Customer: Hi Sarah, I'm having trouble with my GPS navigation system. It keeps losing signal.\n\n\
                Agent: I understand your frustration. Let me help you troubleshoot this issue. Can you tell me the model of your GPS system?\n\n\
                Customer: It's the MarineNav Pro 2000.\n\n\
                Agent: Great, that's a popular model. Let's try a few troubleshooting steps. First, have you updated the software recently?\n\n\
                Customer: I'm not sure how to do that. This is all very confusing to me.\n\n\
                Agent: No worries, I'll walk you through it step by step. However, given the complexity of this issue, I think it would be best to connect you with our Level 2 technical support team who can provide more detailed assistance.\n\n\
                Customer: Okay, that sounds good. Thank you for your help.",
            summary: "Customer experiencing GPS signal issues with MarineNav Pro 2000. Basic troubleshooting attempted, escalated to Level 2 support for advanced technical assistance.",
        },
        Seed {
            id: "3",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d741c",
            customer: "Lisa Chen",
            agent: "Robert Martinez",
            timestamp: "2025-05-20T13:45:15-04:00",
            recording_start: "2025-05-20T13:45:15-04:00",
            duration_secs: 89,
            intent: "Product Inquiry",
            emotion: Emotion::Excited,
            resolution: Resolution::Resolved,
            satisfaction: 4.8,
            transcript: "Agent: Good afternoon, this is Robert. How can I help you today?\n\n\
                Customer: Hi Robert! I'm looking for information about your new yacht models. I'm particularly interested in the luxury sailing yachts.\n\n\
                Agent: Excellent! I'd be happy to help you with that. Are you looking for a specific size range or particular features?\n\n\
                Customer: I'm interested in something around 40-50 feet, with modern amenities and good sailing performance.\n\n\
                Agent: Perfect! We have several models in that range that would be ideal. The Ocean Master 45 and the WindStar 48 are both very popular choices. Would you like me to send you detailed specifications and pricing information?\n\n\
                Customer: Yes, that would be wonderful! Also, would it be possible to schedule a viewing?\n\n\
                Agent: I can arrange a viewing at our marina. Let me get your contact information and we'll set that up for you.\n\n\
                Customer: This is so exciting! Thank you so much for your help.",
            summary: "Customer inquiry about luxury sailing yachts in 40-50 foot range. Agent provided information on Ocean Master 45 and WindStar 48 models, scheduled viewing appointment.",
        },
        Seed {
            id: "4",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d742c",
            customer: "James Wilson",
            agent: "Emily Davis",
            timestamp: "2025-05-21T10:30:45-04:00",
            recording_start: "2025-05-21T10:30:45-04:00",
            duration_secs: 156,
            intent: "Scheduling",
            emotion: Emotion::Calm,
            resolution: Resolution::Resolved,
            satisfaction: 4.5,
            transcript: "Agent: Good morning, this is Emily from Aquidneck Yacht Brokers. How may I assist you?\n\n\
                Customer: Hi Emily, I'd like to schedule a viewing for the Catalina 42 that's listed on your website.\n\n\
                Agent: The Catalina 42 is a beautiful yacht. When would be convenient for you to view it?\n\n\
                Customer: I'm flexible this week. What times do you have available?\n\n\
                Agent: We have openings on Wednesday at 2 PM, Thursday at 10 AM, or Friday at 3 PM. Which works best for you?\n\n\
                Customer: Thursday at 10 AM would be perfect.\n\n\
                Agent: Excellent! I'll schedule you for Thursday at 10 AM. The yacht is located at our Newport marina. I'll send you the exact location and my contact information.\n\n\
                Customer: That sounds great. Should I bring anything specific?\n\n\
                Agent: Just bring a valid ID and comfortable shoes for walking on the deck. I'll have all the specifications and documentation ready for you.\n\n\
                Customer: Perfect, thank you so much for your help!",
            summary: "Customer scheduled viewing appointment for Catalina 42 yacht. Appointment set for Thursday 10 AM at Newport marina with all necessary details provided.",
        },
        Seed {
            id: "5",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d743c",
            customer: "Patricia Brown",
            agent: "Mark Johnson",
            timestamp: "2025-05-22T16:20:30-04:00",
            recording_start: "2025-05-22T16:20:30-04:00",
            duration_secs: 203,
            intent: "Returns",
            emotion: Emotion::Frustrated,
            resolution: Resolution::Resolved,
            satisfaction: 4.0,
            transcript: "Agent: Hello, this is Mark from customer service. How can I help you today?\n\n\
                Customer: Hi Mark, I need to return some equipment I purchased last week. The marine radio isn't working properly.\n\n\
                Agent: I'm sorry to hear you're having issues with the marine radio. Can you tell me what specific problems you're experiencing?\n\n\
                Customer: The radio keeps cutting out and the reception is very poor, even in clear weather conditions.\n\n\
                Agent: That definitely sounds like a defective unit. Do you have your order number and receipt?\n\n\
                Customer: Yes, the order number is MR-7845 and I have the receipt right here.\n\n\
                Agent: Perfect. Since this appears to be a manufacturing defect, we can process a full refund or exchange. Which would you prefer?\n\n\
                Customer: I'd like an exchange for the same model, if possible.\n\n\
                Agent: Absolutely. I'll arrange for a replacement to be sent out today, and we'll include a prepaid return label for the defective unit.\n\n\
                Customer: That's great service. Thank you for making this so easy.\n\n\
                Agent: You're very welcome! You should receive the replacement within 2-3 business days.",
            summary: "Customer returned defective marine radio with poor reception. Agent processed exchange for same model with expedited shipping and prepaid return label.",
        },
        Seed {
            id: "6",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d744c",
            customer: "Robert Garcia",
            agent: "Jennifer Lee",
            timestamp: "2025-05-23T11:15:18-04:00",
            recording_start: "2025-05-23T11:15:18-04:00",
            duration_secs: 98,
            intent: "Pricing",
            emotion: Emotion::Calm,
            resolution: Resolution::Resolved,
            satisfaction: 4.6,
            transcript: "Agent: Good morning, this is Jennifer from Aquidneck Yacht Brokers. How may I help you?\n\n\
                Customer: Hi Jennifer, I'm interested in getting a quote for yacht insurance. I have a 38-foot sailboat.\n\n\
                Agent: I'd be happy to help you with that. Can you tell me the make, model, and year of your sailboat?\n\n\
                Customer: It's a 2018 Jeanneau Sun Odyssey 389.\n\n\
                Agent: Excellent choice! For a comprehensive quote, I'll need some additional information. What's the current market value of the yacht?\n\n\
                Customer: I believe it's valued around $180,000.\n\n\
                Agent: Perfect. And where will the yacht be primarily moored?\n\n\
                Customer: At the Newport Harbor marina.\n\n\
                Agent: Great! Based on that information, I can provide you with several insurance options. Our premium coverage starts at around $1,800 annually. Would you like me to email you detailed quotes from our partner insurance companies?\n\n\
                Customer: Yes, that would be very helpful. Thank you!\n\n\
                Agent: I'll send those over within the hour. Is there anything else I can help you with today?",
            summary: "Customer requested yacht insurance quote for 2018 Jeanneau Sun Odyssey 389 valued at $180,000. Agent collected details and arranged to send comprehensive quotes from partner companies.",
        },
        Seed {
            id: "7",
            uuid: "019713bd-3268-86cd-9dd8-dd37220d745c",
            customer: "Amanda Foster",
            agent: "Kevin Chen",
            timestamp: "2025-05-24T14:45:22-04:00",
            recording_start: "2025-05-24T14:45:22-04:00",
            duration_secs: 134,
            intent: "Technical Support",
            emotion: Emotion::Confused,
            resolution: Resolution::Resolved,
            satisfaction: 4.3,
            transcript: "Agent: Hello, this is Kevin from technical support. How can I assist you today?\n\n\
                Customer: Hi Kevin, I'm having trouble with my chartplotter. The screen keeps freezing when I try to zoom in on certain areas.\n\n\
                Agent: I understand that must be frustrating. Can you tell me the make and model of your chartplotter?\n\n\
                Customer: It's a Garmin GPSMAP 8612xsv.\n\n\
                Agent: That's a great unit. This sounds like it might be a software issue. When did you last update the charts and software?\n\n\
                Customer: I'm not sure. I bought the boat six months ago and haven't updated anything since then.\n\n\
                Agent: That's likely the issue. The software updates often include bug fixes for freezing problems. I can walk you through the update process right now if you'd like.\n\n\
                Customer: Yes, please! I have my laptop here.\n\n\
                Agent: Perfect. First, you'll need to go to the Garmin website and download the Garmin Express software...\n\n\
                Customer: Okay, I'm following along. This is very helpful.\n\n\
                Agent: Great! Once the update is complete, the freezing issue should be resolved. The whole process takes about 20 minutes.\n\n\
                Customer: Thank you so much for your patience and help!",
            summary: "Customer experiencing chartplotter screen freezing issues with Garmin GPSMAP 8612xsv. Agent identified outdated software as cause and guided customer through update process to resolve the problem.",
        },
    ]
}
