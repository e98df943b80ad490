use super::read_input;
use crate::cli::StatsArgs;
use precis_core::summary_stats;

pub fn run(args: &StatsArgs) -> anyhow::Result<()> {
    let original = read_input(Some(args.original.as_path()))?;
    let summary = read_input(Some(args.summary.as_path()))?;
    let stats = summary_stats(&original, &summary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}
