use anyhow::Context;
use mdiff::Error;
use mdiff::snapshot::RemoveOutcome;

use crate::commands::CommandOptions;
use crate::interactive::Confirmer;

pub struct Remove;

impl Remove {
    pub fn execute(names: &[String], all: bool, options: &CommandOptions) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let store = CommandOptions::store(&config)?;

        if all {
            let confirmer = Confirmer::new(options.yes_all);
            return match store.remove_all(|names| confirmer.remove_all(names)) {
                Ok(0) => {
                    println!("No snapshots to remove");
                    Ok(())
                }
                Ok(count) => {
                    println!("Removed {count} snapshot(s)");
                    Ok(())
                }
                Err(Error::Cancelled) => {
                    eprintln!("Removal cancelled by user.");
                    Ok(())
                }
                Err(e) => Err(e).context("Failed to remove snapshots"),
            };
        }

        let outcomes = store.remove(names).context("Failed to remove snapshots")?;
        for (name, outcome) in outcomes {
            match outcome {
                RemoveOutcome::Deleted => println!("Snapshot {name} was deleted"),
                RemoveOutcome::NotFound => eprintln!("Snapshot {name} doesn't exist"),
            }
        }

        Ok(())
    }
}
