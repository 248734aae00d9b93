use ciarp_store::{format_records, ConversationStore, FilterCriteria};

/// `ciarp list`: conversations matching every given filter.
pub fn execute(store: &ConversationStore, criteria: &FilterCriteria, json: bool) -> anyhow::Result<()> {
    let matched = store.filter(criteria);
    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        print!("{}", format_records(&matched));
    }
    Ok(())
}
