pub const PARALLAX_FACTOR: f64 = -0.1;

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn parallax_style(scroll_y: f64) -> String {
    let offset = parallax_offset(scroll_y);
    // 0 * -0.1 is -0, which would print as "-0px".
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("transform: translateY({}px); transition: transform 0.45s ease-out;", offset)
}
