use clap::Subcommand;
use rapport_core::haptics::get_pattern_named;
use rapport_core::{get_pattern, PatternName};
use serde_json::json;

#[derive(Subcommand)]
pub enum PatternAction {
    /// List every pattern with its step and wait totals
    List,
    /// Print the steps of one pattern
    Show {
        /// Catalog name (e.g. "SuperLike", "ConversationWarmth(hot)")
        name: String,
    },
}

pub fn run(action: PatternAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PatternAction::List => {
            let rows: Vec<_> = PatternName::ALL
                .into_iter()
                .map(get_pattern)
                .map(|pattern| {
                    json!({
                        "name": pattern.name(),
                        "outputs": pattern.output_count(),
                        "total_wait_ms": pattern.total_wait_ms(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        PatternAction::Show { name } => {
            let pattern = get_pattern_named(&name)?;
            println!("{}", serde_json::to_string_pretty(&pattern)?);
        }
    }
    Ok(())
}
