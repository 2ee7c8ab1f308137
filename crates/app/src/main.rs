use anyhow::Context;

use smartwaste_inventory::{Page, Session};

fn main() -> anyhow::Result<()> {
    smartwaste_observability::init();

    let page = match std::env::args().nth(1) {
        None => Page::default(),
        Some(arg) => Page::parse(&arg).with_context(|| {
            format!("unknown page {arg:?} (expected dashboard, inventory or logs)")
        })?,
    };

    let mut session = Session::from_env().context("failed to start session")?;
    session.navigate(page);
    tracing::info!(page = page.as_str(), items = session.list_inventory().len(), "rendering");

    let view = smartwaste_app::render(&session).context("failed to render view")?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
