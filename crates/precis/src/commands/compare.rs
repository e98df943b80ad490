use super::{load_summarizer, read_input};
use crate::cli::CompareArgs;
use precis_core::{clamp_count, split_sentences, Method, Summarizer};

const RULE_WIDTH: usize = 80;

pub fn run(args: &CompareArgs) -> anyhow::Result<()> {
    let text = read_input(args.input.file.as_deref())?;
    let summarizer = load_summarizer(args.input.config.as_deref())?;
    let count = clamp_count(args.input.sentences, split_sentences(&text).len());
    print!("{}", render(&summarizer, &text, count)?);
    Ok(())
}

fn render(summarizer: &Summarizer, text: &str, count: usize) -> anyhow::Result<String> {
    let mut out = String::new();
    for method in Method::ALL {
        let summary = summarizer.summarize(text, count, method)?;
        let stats = summarizer.summary_stats(text, &summary);

        out.push_str(&format!("METHOD: {}\n", method.as_str().to_uppercase()));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&summary);
        out.push_str("\n\n");
        out.push_str(&stats.to_string());
        out.push_str("\n\n");
    }
    Ok(out)
}
