/// Tournament case parsing.
///
/// Input format: a case count, then per case a competitor count N followed
/// by N lines of N space-separated 0/1 tokens ("row beats column"). All
/// validation happens here, before the engine ever sees a bitmask: the
/// engine itself has no recoverable-error paths.
use bracketbound_core::constants::MAX_COMPETITORS;
use bracketbound_core::{CapabilityRelation, CompetitorSet};

type Lines<'a> = std::iter::Enumerate<std::str::Lines<'a>>;

/// Parse the full input text into one capability relation per case.
pub fn parse_cases(content: &str) -> Result<Vec<CapabilityRelation>, String> {
    let mut lines = content.lines().enumerate();

    let (line_no, text) = next_line(&mut lines, "case count")?;
    let case_count: usize = text
        .parse()
        .map_err(|_| format!("line {line_no}: invalid case count \"{text}\""))?;

    let mut cases = Vec::with_capacity(case_count);
    for case in 1..=case_count {
        cases.push(parse_case(&mut lines, case)?);
    }
    Ok(cases)
}

/// Next non-blank line, trimmed, with its 1-based line number.
fn next_line<'a>(lines: &mut Lines<'a>, what: &str) -> Result<(usize, &'a str), String> {
    for (idx, line) in lines.by_ref() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok((idx + 1, trimmed));
        }
    }
    Err(format!("unexpected end of input while reading {what}"))
}

fn parse_case(lines: &mut Lines, case: usize) -> Result<CapabilityRelation, String> {
    let (line_no, text) = next_line(lines, &format!("competitor count for case {case}"))?;
    let n: usize = text
        .parse()
        .map_err(|_| format!("line {line_no}: invalid competitor count \"{text}\""))?;
    if n < 1 || n > MAX_COMPETITORS {
        return Err(format!(
            "line {line_no}: competitor count {n} out of range 1..={MAX_COMPETITORS}"
        ));
    }
    if !n.is_power_of_two() {
        return Err(format!(
            "line {line_no}: competitor count {n} is not a power of two"
        ));
    }

    let mut rows: Vec<CompetitorSet> = Vec::with_capacity(n);
    for i in 0..n {
        let (line_no, text) = next_line(lines, &format!("matrix row {i} for case {case}"))?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != n {
            return Err(format!(
                "line {line_no}: expected {n} tokens in matrix row, got {}",
                tokens.len()
            ));
        }
        let mut row: CompetitorSet = 0;
        for (j, token) in tokens.iter().enumerate() {
            match *token {
                "0" => {}
                "1" if i == j => {
                    return Err(format!(
                        "line {line_no}: competitor {i} cannot beat itself"
                    ));
                }
                "1" => row |= 1 << j,
                _ => {
                    return Err(format!(
                        "line {line_no}: invalid matrix token \"{token}\", expected 0 or 1"
                    ));
                }
            }
        }
        rows.push(row);
    }

    Ok(CapabilityRelation::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_cases() {
        let input = "\
2
2
0 1
0 0
4
0 1 1 1
0 0 1 1
0 0 0 1
0 0 0 0
";
        let cases = parse_cases(input).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].competitor_count(), 2);
        assert!(cases[0].beats(0, 1));
        assert!(!cases[0].beats(1, 0));
        assert_eq!(cases[1].competitor_count(), 4);
        assert_eq!(cases[1].row(0), 0b1110);
        assert_eq!(cases[1].row(3), 0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "1\n\n2\n\n0 1\n0 0\n";
        let cases = parse_cases(input).unwrap();
        assert_eq!(cases.len(), 1);
        assert!(cases[0].beats(0, 1));
        assert!(!cases[0].beats(1, 0));
    }

    #[test]
    fn test_rejects_bad_token() {
        let input = "1\n2\n0 x\n0 0\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("invalid matrix token"), "{err}");
        assert!(err.contains("line 3"), "{err}");
    }

    #[test]
    fn test_rejects_wrong_row_length() {
        let input = "1\n2\n0 1 0\n0 0\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("expected 2 tokens"), "{err}");
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let input = "1\n3\n0 1 1\n0 0 1\n0 0 0\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("not a power of two"), "{err}");
    }

    #[test]
    fn test_rejects_self_win() {
        let input = "1\n2\n1 0\n0 0\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("cannot beat itself"), "{err}");
    }

    #[test]
    fn test_rejects_truncated_input() {
        let input = "1\n4\n0 1 1 1\n0 0 1 1\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("unexpected end of input"), "{err}");
    }

    #[test]
    fn test_rejects_oversized_count() {
        let input = "1\n32\n";
        let err = parse_cases(input).unwrap_err();
        assert!(err.contains("out of range"), "{err}");
    }
}
