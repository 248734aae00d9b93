use ciarp_assist::{respond, ChatRequest, TextGenerator};
use ciarp_store::ConversationStore;

/// `ciarp ask <message>`: one round-trip to the assistant.
pub fn execute(
    store: &ConversationStore,
    generator: &dyn TextGenerator,
    message: &str,
    domain: &str,
    context_id: Option<&str>,
) -> anyhow::Result<()> {
    let conversation_data = match context_id {
        Some(id) => {
            let record = store
                .get_by_id(id)
                .ok_or_else(|| anyhow::anyhow!("no conversation with id '{id}'"))?;
            Some(serde_json::to_value(record)?)
        }
        None => None,
    };

    let req = ChatRequest {
        message: message.to_string(),
        domain: domain.to_string(),
        conversation_data,
    };
    let reply = respond(generator, &req)?;
    println!("{}", reply.response);
    Ok(())
}
