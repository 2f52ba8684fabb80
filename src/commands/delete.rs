use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::EventStore;

use crate::render::Render;
use crate::store::JsonStore;

pub fn run(store: &mut JsonStore, id: &str) -> Result<()> {
    let event = store.find(id)?.event;

    store.delete(&event.id)?;
    println!("{} {}", "Deleted".red(), event.render());

    Ok(())
}
