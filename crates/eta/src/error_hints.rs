use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to load settings")
        && (haystack.contains("no such file or directory")
            || haystack.contains("cannot find the file"))
    {
        push_hint(&mut out, "Verify the --config path exists and is readable.");
        push_hint(
            &mut out,
            "Omit --config to use `eta.toml` in the working directory, or built-in defaults.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `eta.toml` syntax and key names; categories and warning tags are lower-case.",
        );
    }

    if haystack.contains("base_minutes") || haystack.contains("iteration range") {
        push_hint(
            &mut out,
            "Tier base_minutes must be positive and strictly increase from trivial to major.",
        );
    }

    if haystack.contains("estimate weight") || haystack.contains("high_factor") {
        push_hint(
            &mut out,
            "Weights in `[weights]` must be non-negative, with low_factor <= high_factor.",
        );
    }

    if haystack.contains("regex parse error") || haystack.contains("risk pattern") {
        push_hint(
            &mut out,
            "Every entry in `risk.patterns` must be a valid regular expression.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
