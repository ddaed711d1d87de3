//! Candidate corpus assembly — the ordered merge of file-derived and
//! pasted-text candidate resumes feeding one screening request.

/// Splits pasted resume text into candidate segments on separator lines
/// consisting of exactly `---` (surrounding whitespace on the line is
/// tolerated). Segments that are blank after trimming are dropped.
pub fn split_pasted_resumes(pasted: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    for line in pasted.lines() {
        if line.trim() == "---" {
            push_segment(&mut segments, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_segment(&mut segments, &mut current);
    segments
}

fn push_segment(segments: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
    current.clear();
}

/// Merges extracted file texts (upload order) with pasted segments
/// (appearance order), in that order. Every entry is trimmed; entries empty
/// after trimming are filtered out, so the corpus invariant — no blank
/// candidates — holds by construction.
pub fn merge_candidates(file_texts: Vec<String>, pasted: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = file_texts
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    if let Some(pasted) = pasted {
        candidates.extend(split_pasted_resumes(pasted));
    }
    candidates
}
