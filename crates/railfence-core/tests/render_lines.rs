// crates/railfence-core/tests/render_lines.rs

use railfence_core::render;

#[test]
fn hello_rails3_exact_lines() {
    // pattern [0,1,2,1,0]
    let lines = render("HELLO", 3).unwrap().expect("non-degenerate");
    assert_eq!(lines, vec!["H   O", " E L ", "  L  "]);
}

#[test]
fn line_shape_matches_text_and_rails() {
    let text = "WEAREDISCOVEREDFLEEATONCE";
    for rails in 2..=6 {
        let lines = render(text, rails).unwrap().expect("non-degenerate");
        assert_eq!(lines.len(), rails);
        for line in &lines {
            assert_eq!(line.chars().count(), text.chars().count(), "rails={rails}");
        }

        // Every column holds its character on exactly one line.
        for (j, ch) in text.chars().enumerate() {
            let hits = lines
                .iter()
                .filter(|l| l.chars().nth(j) == Some(ch))
                .count();
            assert!(hits >= 1, "rails={rails} col={j}");
        }
    }
}

#[test]
fn reading_columns_top_to_bottom_restores_the_text() {
    let text = "HELLO WORLD";
    let lines = render(text, 4).unwrap().expect("non-degenerate");

    let grids: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let mut restored = String::new();
    for j in 0..text.chars().count() {
        for row in &grids {
            if row[j] != ' ' {
                restored.push(row[j]);
            }
        }
    }
    // The space characters of the text itself vanish in this readback.
    let expected: String = text.chars().filter(|&c| c != ' ').collect();
    assert_eq!(restored, expected);
}

#[test]
fn degenerate_range_renders_nothing() {
    assert!(render("TEST", 1).unwrap().is_none());
    assert!(render("TEST", 4).unwrap().is_none());
    assert!(render("TEST", 9).unwrap().is_none());
    assert!(render("", 3).unwrap().is_none());
}

#[test]
fn rejects_zero_rails() {
    assert!(render("TEST", 0).is_err());
}
