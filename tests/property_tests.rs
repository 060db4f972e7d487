use keeb::geometry::{Keyboard, Row};
use keeb::layouts::build_qwerty_layout;
use proptest::prelude::*;

prop_compose! {
    fn arb_keyboard()(
        key_width in 1.0..50.0f32,
        space_width in 0.0..10.0f32,
        rows in proptest::collection::vec(
            (0.0..100.0f32, proptest::collection::vec(proptest::char::range('a', 'z'), 0..12)),
            0..6
        )
    ) -> Keyboard {
        let mut kb = Keyboard::new("prop", key_width, space_width).unwrap();
        for (x_start, values) in rows {
            let mut row = Row::new(x_start);
            for v in values {
                row.add_key(v);
            }
            kb.push_row(row);
        }
        kb
    }
}

proptest! {
    #[test]
    fn test_lookup_is_idempotent(c in any::<char>()) {
        let kb = build_qwerty_layout();
        prop_assert_eq!(kb.get_key_point(c), kb.get_key_point(c));
    }

    #[test]
    fn test_ascii_case_folding(c in proptest::char::range('a', 'z')) {
        let kb = build_qwerty_layout();
        prop_assert_eq!(kb.get_key_point(c.to_ascii_uppercase()), kb.get_key_point(c));
    }

    #[test]
    fn test_first_match_formula(kb in arb_keyboard(), c in proptest::char::range('a', 'z')) {
        let first = kb.rows.iter().enumerate().find_map(|(r, row)| {
            row.keys.iter().position(|k| k.value == c).map(|col| (r, col))
        });

        match (first, kb.get_key_point(c)) {
            (Some((r, col)), Some(p)) => {
                let pitch = kb.key_width + kb.space_width;
                prop_assert_eq!(p.x, kb.rows[r].x_start + pitch * col as f32);
                prop_assert_eq!(p.y, pitch * r as f32);
            }
            (None, None) => {}
            (expected, actual) => {
                prop_assert!(false, "expected {:?}, got {:?}", expected, actual);
            }
        }
    }
}
