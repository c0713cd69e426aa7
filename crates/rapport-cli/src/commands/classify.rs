use clap::Args;
use rapport_core::{policy_for, Config, DecayWindow, Tier};
use serde_json::json;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Whole days since the last positive interaction
    #[arg(allow_negative_numbers = true)]
    pub elapsed: i64,
    /// Override the configured decay window
    #[arg(long)]
    pub total_days: Option<u32>,
    /// Also print the tier table for the window
    #[arg(long)]
    pub table: bool,
}

fn window_for(total_days: Option<u32>) -> Result<DecayWindow, Box<dyn std::error::Error>> {
    match total_days {
        Some(days) => Ok(DecayWindow::try_new(days)?),
        None => Ok(Config::load_or_default().decay_window()?),
    }
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let window = window_for(args.total_days)?;
    let status = window.status(args.elapsed);

    let mut output = json!({
        "status": status,
        "banner": policy_for(status.tier),
    });
    if args.table {
        output["table"] = serde_json::to_value(window.tier_table())?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn run_policy(tier: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tier: Tier = tier.parse()?;
    let output = json!({
        "tier": tier,
        "label": tier.label(),
        "color": tier.color().as_str(),
        "hex": tier.color().hex(),
        "banner": policy_for(tier),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
