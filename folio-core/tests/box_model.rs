//! Box-model derivation invariants across edge-value combinations.

use folio_core::{BoxFrame, Edges, Rect};

/// A small spread of representative edge values, including zero.
const EDGE_VALUES: [f32; 4] = [0.0, 0.1, 1.0, 4.5];

fn edge_combinations() -> Vec<Edges> {
    let mut combos = Vec::new();
    for top in EDGE_VALUES {
        for right in EDGE_VALUES {
            combos.push(Edges {
                top,
                right,
                bottom: EDGE_VALUES[(combos.len() / 2) % EDGE_VALUES.len()],
                left: EDGE_VALUES[combos.len() % EDGE_VALUES.len()],
            });
        }
    }
    combos
}

#[test]
fn test_inner_size_formula_holds_for_all_combinations() {
    for border in edge_combinations() {
        for padding in edge_combinations() {
            let frame = BoxFrame::compute(50.0, 15.0, &border, &padding);

            let expected_width =
                50.0 - border.left - border.right - padding.left - padding.right;
            let expected_height =
                15.0 - border.top - border.bottom - padding.top - padding.bottom;

            assert_eq!(frame.content.width, expected_width);
            assert_eq!(frame.content.height, expected_height);
            assert_eq!(frame.content.x, border.left + padding.left);
            assert_eq!(frame.content.y, border.top + padding.top);
        }
    }
}

#[test]
fn test_borders_do_not_intersect_content_for_all_combinations() {
    for border in edge_combinations() {
        for padding in edge_combinations() {
            let frame = BoxFrame::compute(50.0, 15.0, &border, &padding);
            for (edge, rect) in frame.border_rects() {
                assert!(
                    !rect.intersects(&frame.content),
                    "{edge:?} border intersects content for border={border:?} padding={padding:?}"
                );
            }
        }
    }
}

#[test]
fn test_repeated_derivation_has_no_drift() {
    let border = Edges {
        top: 0.1,
        right: 1.0,
        bottom: 0.1,
        left: 1.0,
    };
    let padding = Edges::uniform(4.5);

    let first = BoxFrame::compute(50.0, 15.0, &border, &padding);
    let mut current = first;
    for _ in 0..1000 {
        current = BoxFrame::compute(50.0, 15.0, &border, &padding);
        assert_eq!(current, first);
    }
}

#[test]
fn test_reference_cell_geometry() {
    // The canonical cell: 50 x 15, border 1, padding 2.
    let frame = BoxFrame::compute(50.0, 15.0, &Edges::uniform(1.0), &Edges::uniform(2.0));

    assert_eq!(frame.content, Rect::new(3.0, 3.0, 44.0, 8.0));
    assert_eq!(frame.top, Rect::new(0.0, 0.0, 50.0, 1.0));
    assert_eq!(frame.right, Rect::new(49.0, 0.0, 1.0, 15.0));
    assert_eq!(frame.bottom, Rect::new(0.0, 14.0, 50.0, 1.0));
    assert_eq!(frame.left, Rect::new(0.0, 0.0, 1.0, 15.0));
}

#[test]
fn test_oversized_insets_produce_degenerate_content() {
    let frame = BoxFrame::compute(
        50.0,
        15.0,
        &Edges {
            top: 1.0,
            right: 30.0,
            bottom: 1.0,
            left: 30.0,
        },
        &Edges::zero(),
    );

    assert!(frame.content.width <= 0.0);
    assert!(frame.content.is_degenerate());
    // Degenerate content intersects nothing, by definition.
    for (_, rect) in frame.border_rects() {
        assert!(!rect.intersects(&frame.content));
    }
}
