use crate::config::GeometryParams;
use crate::error::KbResult;
use crate::geometry::{Keyboard, Row};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Offsets of QWERTY rows 1..3. Row 0 starts one key pitch from the edge.
const QWERTY_ROW_OFFSETS: [f32; 3] = [27.0, 38.0, 43.0];

#[rustfmt::skip]
const QWERTY_ROWS: [&[char]; 4] = [
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm'],
];

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
}

impl KnownLayout {
    pub fn build(&self, params: &GeometryParams) -> KbResult<Keyboard> {
        match self {
            Self::Qwerty => build_qwerty_layout_with(params),
        }
    }
}

/// The QWERTY number and letter block with the standard dimensions.
pub fn build_qwerty_layout() -> Keyboard {
    let params = GeometryParams::default();
    let mut kb = Keyboard {
        name: "QWERTY".to_string(),
        key_width: params.key_width,
        space_width: params.space_width,
        rows: Vec::new(),
    };
    populate_qwerty(&mut kb);
    kb
}

pub fn build_qwerty_layout_with(params: &GeometryParams) -> KbResult<Keyboard> {
    let mut kb = Keyboard::new("QWERTY", params.key_width, params.space_width)?;
    populate_qwerty(&mut kb);
    Ok(kb)
}

fn populate_qwerty(kb: &mut Keyboard) {
    let x_starts = [
        kb.pitch(),
        QWERTY_ROW_OFFSETS[0],
        QWERTY_ROW_OFFSETS[1],
        QWERTY_ROW_OFFSETS[2],
    ];

    for (x_start, values) in x_starts.iter().zip(QWERTY_ROWS.iter()) {
        let mut row = Row::new(*x_start);
        for &v in values.iter() {
            row.add_key(v);
        }
        kb.push_row(row);
    }

    let dupes = kb.duplicate_keys();
    if !dupes.is_empty() {
        warn!(
            "{} carries duplicate keys {:?}; lookup returns the first in row-major order",
            kb.name, dupes
        );
    }
    debug!(
        "Built {} ({} rows, {} keys, pitch {:.3})",
        kb.name,
        kb.rows.len(),
        kb.key_count(),
        kb.pitch()
    );
}
