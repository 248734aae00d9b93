use ciarp_store::{format_record, ConversationStore};

/// `ciarp show <id>`
pub fn execute(store: &ConversationStore, id: &str, json: bool) -> anyhow::Result<()> {
    let Some(record) = store.get_by_id(id) else {
        anyhow::bail!("no conversation with id '{id}'");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", format_record(record));
    }
    Ok(())
}
