// Transformation passes for comment-block normalization.
// Each pass is a pure function over the whole input; output assembly uses a
// growable buffer local to the call, never shared accumulation.

use super::{NewlineStyle, Options};

/// Run the full pipeline with resolved options: strip indentation, strip
/// the marker, trim the outside, then rejoin into paragraphs
pub(crate) fn run(input: &str, options: &Options) -> String {
    let unindented = strip_indentation(input, options.newline);
    let unmarked = strip_marker(&unindented, &options.symbol);
    join_sentences(unmarked.trim(), options.newline, options.join)
}

/// Strip leading indentation from every line
///
/// Splits on the configured separator, removes the leading run of spaces and
/// tabs from each line, and rejoins with one trailing separator after every
/// line including the last. Only `' '` and `'\t'` count as indentation;
/// other whitespace such as NBSP belongs to the line content and stays.
pub fn strip_indentation(input: &str, newline: NewlineStyle) -> String {
    let sep = newline.as_str();
    let mut result = String::with_capacity(input.len() + sep.len());

    for line in input.split(sep) {
        result.push_str(line.trim_start_matches(|c: char| c == ' ' || c == '\t'));
        result.push_str(sep);
    }

    result
}

/// Remove every literal occurrence of the comment marker
///
/// Whole-text, case-sensitive substring removal. A marker occurring
/// mid-word is removed along with line-leading ones.
pub fn strip_marker(input: &str, symbol: &str) -> String {
    input.replace(symbol, "")
}

/// Rejoin marker-stripped lines into sentences separated by paragraph breaks
///
/// Consecutive non-blank lines are trimmed and joined with single spaces
/// into one sentence. A run of one or more blank lines after a sentence
/// becomes exactly one paragraph break of `join + 1` separators; blank lines
/// with no sentence content before them produce nothing. The final sentence
/// carries no trailing break.
pub fn join_sentences(input: &str, newline: NewlineStyle, join: usize) -> String {
    let sep = newline.as_str();
    let paragraph_break = sep.repeat(join + 1);
    let mut output = String::with_capacity(input.len());
    let mut sentence: Vec<&str> = Vec::new();

    for line in input.split(sep) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            // Break only on the transition out of a sentence; further blank
            // lines in the same run fall through without effect
            if !sentence.is_empty() {
                push_sentence(&mut output, &sentence);
                output.push_str(&paragraph_break);
                sentence.clear();
            }
        } else {
            sentence.push(trimmed);
        }
    }

    if !sentence.is_empty() {
        push_sentence(&mut output, &sentence);
    }

    output
}

/// Append the buffered sentence lines joined by single spaces
fn push_sentence(output: &mut String, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push_str(line);
    }
}
