/// Fixed slice palette; indices past the end wrap around.
pub const PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

pub const TEAL_FILL: &str = "rgba(75, 192, 192, 0.6)";
pub const TEAL_BORDER: &str = "rgba(75, 192, 192, 1)";
pub const TEAL_LINE: &str = "rgb(75, 192, 192)";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One palette color per item, in item order.
pub fn palette_cycle(count: usize) -> Vec<String> {
    (0..count).map(|i| palette_color(i).to_string()).collect()
}
