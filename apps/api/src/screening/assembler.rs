//! Screening prompt assembly.

/// Builds the user payload: the job description followed by numbered
/// candidate resumes. Numbering is 1-based and reflects merge order
/// (uploaded files first, then pasted segments). The exact layout is
/// load-bearing for report reproducibility, so change it deliberately.
pub fn build_screening_prompt(job_description: &str, candidates: &[String]) -> String {
    let mut prompt = format!(
        "Job Description:\n\n{}\n\nCandidates:\n",
        job_description.trim()
    );
    for (idx, resume) in candidates.iter().enumerate() {
        prompt.push_str(&format!(
            "\n---\nCandidate {} Resume:\n{}\n",
            idx + 1,
            resume.trim()
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_prompt_layout() {
        let candidates = vec!["Alice resume".to_string(), "Bob resume".to_string()];
        let prompt = build_screening_prompt("Backend role", &candidates);
        let expected = "Job Description:\n\n\
            Backend role\n\n\
            Candidates:\n\n\
            ---\n\
            Candidate 1 Resume:\n\
            Alice resume\n\n\
            ---\n\
            Candidate 2 Resume:\n\
            Bob resume\n";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let candidates = vec!["  padded resume \n".to_string()];
        let prompt = build_screening_prompt("\n  Backend role  ", &candidates);
        assert!(prompt.starts_with("Job Description:\n\nBackend role\n"));
        assert!(prompt.contains("Candidate 1 Resume:\npadded resume\n"));
    }

    #[test]
    fn test_numbering_is_one_based_in_order() {
        let candidates = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let prompt = build_screening_prompt("jd", &candidates);
        let pos_1 = prompt.find("Candidate 1 Resume:\na").unwrap();
        let pos_2 = prompt.find("Candidate 2 Resume:\nb").unwrap();
        let pos_3 = prompt.find("Candidate 3 Resume:\nc").unwrap();
        assert!(pos_1 < pos_2 && pos_2 < pos_3);
    }
}
