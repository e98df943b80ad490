use super::{load_summarizer, read_input};
use crate::cli::SummarizeArgs;
use precis_core::{clamp_count, split_sentences, Method, Summarizer};
use tracing::warn;

pub fn run(args: &SummarizeArgs) -> anyhow::Result<()> {
    let text = read_input(args.input.file.as_deref())?;
    let summarizer = load_summarizer(args.input.config.as_deref())?;
    println!("{}", render(&summarizer, &text, args)?);
    Ok(())
}

fn render(summarizer: &Summarizer, text: &str, args: &SummarizeArgs) -> anyhow::Result<String> {
    let method: Method = args.method.parse()?;

    if args.scores {
        let scored = summarizer.score(text, method)?;
        if args.json {
            return Ok(serde_json::to_string_pretty(&scored)?);
        }
        let lines: Vec<String> = scored
            .iter()
            .map(|s| format!("[{:>3}] {:.4}  {}", s.index, s.score, s.text))
            .collect();
        return Ok(lines.join("\n"));
    }

    let total = split_sentences(text).len();
    let count = clamp_count(args.input.sentences, total);
    if i64::try_from(count).ok() != Some(args.input.sentences) {
        warn!(
            requested = args.input.sentences,
            used = count,
            total,
            "sentence count clamped"
        );
    }

    let summary = summarizer.summarize_detailed(text, count, method)?;
    let summary_text = summary.text();

    if args.json {
        let stats = summarizer.summary_stats(text, &summary_text);
        let output = serde_json::json!({
            "method": summary.method,
            "summary": summary_text,
            "sentences": summary.sentences,
            "stats": stats,
            "compression": stats.compression_percent(),
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(summary_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;

    const TEXT: &str = "AI helps doctors. AI helps engineers. The cat sat on the mat.";

    fn args(sentences: i64, method: &str) -> SummarizeArgs {
        SummarizeArgs {
            input: InputArgs {
                file: None,
                sentences,
                config: None,
            },
            method: method.to_string(),
            json: false,
            scores: false,
        }
    }

    #[test]
    fn test_render_plain_summary() {
        let summarizer = Summarizer::default();
        let output = render(&summarizer, TEXT, &args(1, "frequency")).unwrap();
        assert_eq!(output, "AI helps doctors.");
    }

    #[test]
    fn test_render_negative_count_is_empty() {
        let summarizer = Summarizer::default();
        let output = render(&summarizer, TEXT, &args(-4, "hybrid")).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_render_rejects_unknown_method() {
        let summarizer = Summarizer::default();
        let err = render(&summarizer, TEXT, &args(1, "bogus")).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_render_json() {
        let summarizer = Summarizer::default();
        let mut args = args(2, "frequency");
        args.json = true;
        let output = render(&summarizer, TEXT, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["method"], "frequency");
        assert_eq!(value["summary"], "AI helps doctors. AI helps engineers.");
        assert_eq!(value["sentences"].as_array().unwrap().len(), 2);
        assert_eq!(value["stats"]["summary_sentences"], 2);
    }

    #[test]
    fn test_render_scores() {
        let summarizer = Summarizer::default();
        let mut args = args(1, "position");
        args.scores = true;
        let output = render(&summarizer, TEXT, &args).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("1.0000"));
    }
}
