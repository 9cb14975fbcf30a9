//! Slide module - collapse one line of cells toward its head
//!
//! This is the only place tiles actually move or merge. Every direction is
//! reduced to "slide the rows left" by the rotation wrapper in [`crate::rotate`],
//! so the primitive below only ever works on a left-to-right line.
//!
//! Merging is single-pass and left-biased: a tile produced by a merge cannot
//! merge again in the same slide, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
//! Tiles already at [`MAX_TILE`] stay put as ordinary tiles.

use crate::types::{Cell, MAX_TILE};

/// Slide a line toward index 0, merging equal neighbours once each
///
/// Returns the new line (same length as the input, right-padded with zeros)
/// and the sum of the tiles created by merges.
pub fn slide_line(line: &[Cell]) -> (Vec<Cell>, u64) {
    let tiles: Vec<Cell> = line.iter().copied().filter(|&cell| cell != 0).collect();
    let mut out = Vec::with_capacity(line.len());
    let mut gained = 0u64;

    let mut i = 0usize;
    while i < tiles.len() {
        let tile = tiles[i];
        let merged = match tiles.get(i + 1) {
            Some(&next) if next == tile && tile < MAX_TILE => tile.checked_mul(2),
            _ => None,
        };

        match merged {
            Some(merged) => {
                out.push(merged);
                gained = gained.saturating_add(u64::from(merged));
                // The partner is consumed, and `merged` is never compared again.
                i += 2;
            }
            None => {
                out.push(tile);
                i += 1;
            }
        }
    }

    out.resize(line.len(), 0);
    (out, gained)
}
