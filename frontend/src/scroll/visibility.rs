pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// True once the element's top edge has risen to `threshold` of the viewport height.
pub fn reached_threshold(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top <= viewport_height * threshold
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(reached_threshold(800.0, 1000.0, 0.8));
        assert!(!reached_threshold(800.5, 1000.0, 0.8));
        assert!(reached_threshold(-200.0, 1000.0, 0.5));
    }

    #[test]
    fn scrolled_only_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
