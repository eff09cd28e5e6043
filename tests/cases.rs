use std::fs;

use romana::evaluate;
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, input, expected) in extract_cases(&content) {
            count += 1;
            let actual = match evaluate(input) {
                Ok(result) => result,
                Err(e) => format!("error: {e}"),
            };
            assert_eq!(actual, expected, "case on line {line_no} of {path:?}: {input}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(usize, &str, &str)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (input, expected) = line.split_once(" => ")
                                           .unwrap_or_else(|| panic!("Malformed case: {line}"));
               (i + 1, input, expected.trim())
           })
           .collect()
}
