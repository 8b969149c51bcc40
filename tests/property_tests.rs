use glyphstring::{GlyphString, ELLIPSIS};

const CORPUS: [&str; 12] = [
    "",
    "a",
    "abcdefghijklmnop",
    "aA\u{0308}a",
    "a\u{10302}b\u{10000}",
    "\u{0CAD}\u{0CC6}\u{0CA8}\u{0CBF}\u{0CAC}\u{0CC7}\u{0CA8}\u{0CBF}\u{0CC7}",
    "\u{0939}\u{0948}\u{0932}\u{094B}, \u{0906}\u{092A} \u{0915}\u{0948}\u{0938}\u{0947} \u{0939}\u{0948}\u{0902}?",
    "\u{0B9A}\u{0BCA}\u{0BB2}\u{0BBF}\u{0BB1}\u{0BC1}\u{0BB5}\u{0BC6}",
    "\u{0E2A}\u{0E27}\u{0E31}\u{0E38}\u{0E2A}\u{0E14}\u{0E35}\u{0E04}\u{0E38}\u{0E13}",
    // 以组合符号开头，以及包围符号
    "\u{0301}a\u{20DD}\u{0903}\u{0903}b",
    "x\u{1F600}\u{0301}\u{0301}y\u{2026}",
    "\u{30A7}\u{30C9}\u{30A4}\u{30F3}",
];

fn glyph_ends(string: &GlyphString<'_>) -> Vec<usize> {
    string.char_iterator().map(|glyph| glyph.end()).collect()
}

fn is_glyph_boundary(string: &GlyphString<'_>, idx: usize) -> bool {
    idx == 0 || glyph_ends(string).contains(&idx)
}

#[test]
fn glyphs_reconstruct_the_source() {
    for text in CORPUS {
        let string = GlyphString::from(text);
        let mut rebuilt = String::new();
        string.for_each(|glyph| rebuilt.push_str(glyph));
        assert_eq!(rebuilt, text);

        // 每个字形紧接着上一个字形
        let mut expected_start = 0;
        for glyph in &string {
            assert_eq!(glyph.start, expected_start, "{text:?}");
            expected_start = glyph.end();
        }
        assert_eq!(expected_start, text.len());
    }
}

#[test]
fn larger_budgets_extend_smaller_ones() {
    for text in CORPUS {
        let string = GlyphString::from(text);
        for small in 0..=string.width() + 1 {
            for large in small..=string.width() + 1 {
                let shorter = string.truncate(small);
                let longer = string.truncate(large);
                assert!(longer.starts_with(&shorter), "{text:?} {small} {large}");
            }
        }
    }
}

#[test]
fn truncation_is_idempotent() {
    for text in CORPUS {
        let string = GlyphString::from(text);
        for max_units in 0..=string.width() + 1 {
            let once = string.truncate(max_units);
            let twice = GlyphString::from(once.as_str()).truncate(max_units);
            assert_eq!(once, twice, "{text:?} {max_units}");
        }
    }
}

#[test]
fn truncation_stays_within_budget() {
    for text in CORPUS {
        let string = GlyphString::from(text);
        for max_units in 0..=string.width() + 1 {
            let truncated = string.truncate(max_units);
            assert!(GlyphString::from(truncated.as_str()).width() <= max_units);
            assert!(is_glyph_boundary(&string, truncated.len()), "{text:?} {max_units}");
        }
    }
}

#[test]
fn ellipsis_reserves_one_unit() {
    for text in CORPUS {
        let string = GlyphString::from(text);
        for max_units in 1..=string.width() + 1 {
            let ellipsized = string.ellipsize(max_units);
            if max_units >= string.width() {
                assert_eq!(ellipsized, text, "{max_units}");
                continue;
            }
            let kept = ellipsized
                .strip_suffix(ELLIPSIS)
                .unwrap_or_else(|| panic!("{text:?} {max_units} lost its ellipsis"));
            assert!(GlyphString::from(kept).width() < max_units);
            assert!(is_glyph_boundary(&string, kept.len()), "{text:?} {max_units}");
            assert_eq!(kept, string.truncate(max_units - 1));
        }
        assert_eq!(string.ellipsize(0), "");
    }
}
