use ciarp_store::{format_analytics, format_snapshot, ConversationStore};

/// `ciarp summary`
pub fn summary(store: &ConversationStore, json: bool) -> anyhow::Result<()> {
    let snap = store.summarize();
    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", format_snapshot(&snap));
    }
    Ok(())
}

/// `ciarp analytics`
pub fn analytics(store: &ConversationStore, json: bool) -> anyhow::Result<()> {
    let a = store.analytics();
    if json {
        println!("{}", serde_json::to_string_pretty(&a)?);
    } else {
        print!("{}", format_analytics(&a));
    }
    Ok(())
}

/// `ciarp auto-resolution`
pub fn auto_resolution(json: bool) -> anyhow::Result<()> {
    let report = ciarp_assist::auto_resolution();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let rate = report
        .totals
        .overall_auto_rate
        .map_or_else(|| "—".to_string(), |r| format!("{r}%"));
    println!("Auto-resolution rate: {rate}");
    println!(
        "Handled:              {} of {}",
        report.totals.auto_resolved, report.totals.total_conversations
    );
    println!("Monthly savings:      ${}\n", report.totals.monthly_savings);
    println!("── By category ────────────────────────");
    for c in &report.categories {
        println!("  {:>17}  {:>3}% auto  ({})", c.category, c.auto, c.total);
    }
    println!("\n── Templates ──────────────────────────");
    for t in &report.templates {
        println!("  {:>17}  {:>3}% success  ({} uses)", t.name, t.success, t.usage);
    }
    Ok(())
}
