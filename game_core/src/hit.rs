use crate::Vec2;

/// A click counts when it lands within `radius` of the target center,
/// boundary included
pub fn is_hit(click: Vec2, target: Vec2, radius: f64) -> bool {
    click.distance(target) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Vec2 = Vec2::new(150.0, 300.0);

    #[test]
    fn test_center_is_hit() {
        assert!(is_hit(TARGET, TARGET, 15.0));
        assert!(is_hit(TARGET, TARGET, 0.0));
    }

    #[test]
    fn test_boundary_is_hit() {
        assert!(is_hit(TARGET + Vec2::new(15.0, 0.0), TARGET, 15.0));
        assert!(is_hit(TARGET + Vec2::new(9.0, 12.0), TARGET, 15.0));
    }

    #[test]
    fn test_just_outside_is_miss() {
        let eps = 1e-6;
        assert!(!is_hit(TARGET + Vec2::new(0.0, 15.0 + eps), TARGET, 15.0));
        assert!(!is_hit(TARGET - Vec2::new(15.0 + eps, 0.0), TARGET, 15.0));
    }
}
