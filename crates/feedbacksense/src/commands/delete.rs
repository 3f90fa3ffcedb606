use crate::context::AppContext;

pub fn run(id: &str) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let store = ctx.open_store();

    if !store.delete(id) {
        anyhow::bail!("No feedback item with id {}", id);
    }
    println!("Deleted {} ({} items left).", id, store.len());
    Ok(())
}

pub fn run_clear(confirmed: bool) -> anyhow::Result<()> {
    if !confirmed {
        anyhow::bail!("This deletes all feedback and the report. Re-run with --yes to confirm.");
    }

    let ctx = AppContext::load()?;
    let store = ctx.open_store();
    let removed = store.len();
    store.clear_all();
    println!("Cleared {} feedback items.", removed);
    Ok(())
}
