use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?…]+\s+").expect("sentence pattern is valid"));

/// Split text into batches that respect sentence boundaries
/// Each batch is at most `max_chars` characters; a sentence longer than that
/// is cut by characters.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();
    let mut current_len = 0;
    let mut last_end = 0;

    let sentence_ends = SENTENCE_END
        .find_iter(text)
        .map(|mat| mat.end())
        .chain(std::iter::once(text.len()));

    for end in sentence_ends {
        if end <= last_end {
            continue;
        }
        let sentence = &text[last_end..end];
        let sentence_len = sentence.chars().count();
        last_end = end;

        if current_len + sentence_len > max_chars {
            push_trimmed(&mut batches, &current_batch);
            current_batch.clear();
            current_len = 0;
        }

        if sentence_len > max_chars {
            let chars: Vec<char> = sentence.chars().collect();
            for chunk in chars.chunks(max_chars) {
                push_trimmed(&mut batches, &chunk.iter().collect::<String>());
            }
            continue;
        }

        current_batch.push_str(sentence);
        current_len += sentence_len;
    }

    push_trimmed(&mut batches, &current_batch);
    batches
}

fn push_trimmed(batches: &mut Vec<String>, batch: &str) {
    let trimmed = batch.trim();
    if !trimmed.is_empty() {
        batches.push(trimmed.to_string());
    }
}
