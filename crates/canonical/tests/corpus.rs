use canonical::{normalize, NormalizeConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: NormalizeConfig,
    expected_text: &'static str,
    expected_tokens: &'static [(&'static str, usize, usize)],
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "ascii_whitespace_collapse",
            input: "  Hello   world  ",
            cfg: NormalizeConfig::default(),
            expected_text: "hello world",
            expected_tokens: &[("hello", 0, 5), ("world", 6, 11)],
        },
        Case {
            name: "report_header_with_date",
            input: "Plan comptable\r\nImprimé le 05/03/2024\tpage 1",
            cfg: NormalizeConfig::default(),
            expected_text: "plan comptable imprimé le date page 1",
            expected_tokens: &[
                ("plan", 0, 4),
                ("comptable", 5, 14),
                // "imprimé" is 8 bytes in UTF-8.
                ("imprimé", 15, 23),
                ("le", 24, 26),
                ("date", 27, 31),
                ("page", 32, 36),
                ("1", 37, 38),
            ],
        },
        Case {
            name: "iso_dates_stay_visible",
            input: "Generated 2024-03-05",
            cfg: NormalizeConfig::default(),
            expected_text: "generated 2024-03-05",
            expected_tokens: &[("generated", 0, 9), ("2024-03-05", 10, 20)],
        },
        Case {
            name: "custom_sentinel",
            input: "Du 01/01/2024 au 31/12/2024",
            cfg: NormalizeConfig::default().with_date_sentinel("<date>"),
            expected_text: "du <date> au <date>",
            expected_tokens: &[("du", 0, 2), ("<date>", 3, 9), ("au", 10, 12), ("<date>", 13, 19)],
        },
        Case {
            name: "non_bmp_codepoint",
            input: " a\u{10348}b  c ",
            cfg: NormalizeConfig::default(),
            expected_text: "a\u{10348}b c",
            expected_tokens: &[
                // "a\u{10348}b" is 6 bytes; "a\u{10348}b " is 7; "a\u{10348}b c" is 8.
                ("a\u{10348}b", 0, 6),
                ("c", 7, 8),
            ],
        },
    ];

    for case in cases {
        let doc = normalize(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        assert_eq!(
            doc.text, case.expected_text,
            "text mismatch for {}",
            case.name
        );

        let tokens: Vec<(String, usize, usize)> = doc
            .tokens
            .iter()
            .map(|t| (t.text.clone(), t.start, t.end))
            .collect();
        let expected: Vec<(String, usize, usize)> = case
            .expected_tokens
            .iter()
            .map(|(text, s, e)| (text.to_string(), *s, *e))
            .collect();
        assert_eq!(tokens, expected, "tokens mismatch for {}", case.name);
    }
}
