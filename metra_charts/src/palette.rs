// Copyright 2026 the Metra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default categorical palette and color assignment.

use peniko::Color;

/// The default categorical palette, assigned to series in order.
///
/// Eight entries; assignment wraps around for charts with more series than
/// palette colors.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x14, 0xb8, 0xa6),
    Color::from_rgb8(0xf9, 0x73, 0x16),
];

/// Resolves the color for the series or slice at `index`.
///
/// An explicit color always wins; otherwise the default palette is cycled by
/// index. Deterministic: the same index yields the same color regardless of
/// what other entries chose.
pub fn assign_color(explicit: Option<Color>, index: usize) -> Color {
    explicit.unwrap_or(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
}
