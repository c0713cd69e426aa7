use rapport_core::{
    Config, FeedbackSequencer, HapticFeedback, PatternName, PlaybackReport, SocialEvent,
};

use crate::device::ConsoleDevice;

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}

fn feedback() -> HapticFeedback<ConsoleDevice> {
    let config = Config::load_or_default();
    HapticFeedback::new(FeedbackSequencer::with_config(
        ConsoleDevice::new(),
        &config.haptics,
    ))
}

fn print_report(report: &PlaybackReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn run_pattern(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let name: PatternName = name.parse()?;
    let feedback = feedback();
    let report = runtime()?.block_on(feedback.sequencer().play_named(name));
    print_report(&report)
}

pub fn run_event(event: &str) -> Result<(), Box<dyn std::error::Error>> {
    let event: SocialEvent = event.parse()?;
    let feedback = feedback();
    let report = runtime()?.block_on(feedback.notify(event));
    print_report(&report)
}
