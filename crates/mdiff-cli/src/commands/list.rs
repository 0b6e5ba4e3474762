use anyhow::Context;

use crate::commands::CommandOptions;

pub struct List;

impl List {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let store = CommandOptions::store(&config)?;

        let summaries = store.summaries().context("Failed to read snapshots")?;
        print!("{}", options.renderer().render_summaries(&summaries));

        Ok(())
    }
}
