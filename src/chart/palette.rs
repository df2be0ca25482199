//! Slice colors
//!
//! A fixed ordered palette cycled by slice index, so the same data always
//! renders with the same colors.

pub const SLICE_COLORS: [&str; 8] = [
    "#956065", // Mauve
    "#793d52", // Wine
    "#89a1db", // Periwinkle
    "#9780a1", // Lavender
    "#bfe0f1", // Sky
    "#b8cbe7", // Powder
    "#f4a261", // Sand
    "#2a9d8f", // Teal
];

/// Color of the slice at `index`
pub fn color_for(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}
