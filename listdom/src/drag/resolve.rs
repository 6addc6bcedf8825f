use crate::layout::Rect;

/// Where the placeholder should go relative to a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    Before(&'a str),
    After(&'a str),
}

/// The candidate whose vertical center is nearest to row `y`.
/// On equal distance the first candidate wins.
pub fn closest_sibling<'a>(
    candidates: impl IntoIterator<Item = (&'a str, Rect)>,
    y: u16,
) -> Option<(&'a str, Rect)> {
    let y2 = 2 * y as i32;
    let mut best: Option<((&'a str, Rect), i32)> = None;

    for (id, rect) in candidates {
        let distance = (y2 - rect.center_y2()).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some(((id, rect), distance)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// Slot for the placeholder given the pointer row: before the closest
/// sibling when the pointer is above its center, after it otherwise.
pub fn resolve_slot<'a>(
    candidates: impl IntoIterator<Item = (&'a str, Rect)>,
    y: u16,
) -> Option<Slot<'a>> {
    let (id, rect) = closest_sibling(candidates, y)?;
    if (2 * y as i32) < rect.center_y2() {
        Some(Slot::Before(id))
    } else {
        Some(Slot::After(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_nearest_center() {
        let candidates = [
            ("a", Rect::new(0, 0, 10, 2)),
            ("b", Rect::new(0, 2, 10, 2)),
            ("c", Rect::new(0, 4, 10, 2)),
        ];
        let (id, _) = closest_sibling(candidates, 4).unwrap();
        assert_eq!(id, "b");
    }

    #[test]
    fn tie_goes_to_first_in_order() {
        // Centers at 1 and 5, pointer at 3.
        let candidates = [("a", Rect::new(0, 0, 10, 2)), ("b", Rect::new(0, 4, 10, 2))];
        assert_eq!(resolve_slot(candidates, 3), Some(Slot::After("a")));
    }

    #[test]
    fn pointer_on_center_goes_after() {
        let candidates = [("a", Rect::new(0, 2, 10, 3))];
        // Center is 3.5: row 3 is above it, row 4 below.
        assert_eq!(resolve_slot(candidates, 3), Some(Slot::Before("a")));
        assert_eq!(resolve_slot(candidates, 4), Some(Slot::After("a")));
    }

    #[test]
    fn no_candidates_no_slot() {
        assert_eq!(resolve_slot(std::iter::empty(), 3), None);
    }
}
