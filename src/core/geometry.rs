//! Reine Geometrie-Helfer: kolineare Projektion und Raster-Snap.

use glam::Vec2;

/// Projiziert den Punkt `c` auf die Strecke `a`–`b` (geklemmt).
///
/// `t = ((C−A)·(B−A)) / |B−A|²`; Ergebnis ist `a` für `t ≤ 0`, `b` für
/// `t ≥ 1`, sonst `a + t·(b−a)`. Für die degenerierte Strecke `a == b`
/// wird `a` zurückgegeben.
///
/// Der innere Fall rechnet in f64: Koinzidenz ist exakte Gleichheit, das
/// Ergebnis muss für Rasterpunkte bitgenau auf dem Rasterpunkt landen.
pub fn colinear_point(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    let (a64, b64, c64) = (a.as_dvec2(), b.as_dvec2(), c.as_dvec2());
    let ab = b64 - a64;
    let ac = c64 - a64;

    let numerator = ab.dot(ac);
    let denominator = ab.length_squared();

    if denominator <= 0.0 || numerator <= 0.0 {
        a
    } else if numerator >= denominator {
        b
    } else {
        (a64 + (numerator / denominator) * ab).as_vec2()
    }
}

/// Rastet einen Punkt auf den nächstkleineren Rasterschnittpunkt.
///
/// Entspricht `x − x % gx` pro Achse; Punkte auf dem Raster bleiben
/// unverändert.
pub fn snap_to_grid(point: Vec2, grid: Vec2) -> Vec2 {
    Vec2::new(point.x - point.x % grid.x, point.y - point.y % grid.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn colinear_point_projects_inside_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        let p = colinear_point(a, b, Vec2::new(50.0, 37.0));
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn colinear_point_clamps_to_start() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        let p = colinear_point(a, b, Vec2::new(-20.0, 5.0));
        assert_eq!(p, a);
    }

    #[test]
    fn colinear_point_clamps_to_end() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        let p = colinear_point(a, b, Vec2::new(150.0, -5.0));
        assert_eq!(p, b);
    }

    #[test]
    fn colinear_point_interior_result_is_grid_exact() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);

        // Bitgenaues Ergebnis, kein 60.000004 aus der f32-Arithmetik.
        let p = colinear_point(a, b, Vec2::new(60.0, 5.0));
        assert_eq!(p, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn colinear_point_degenerate_segment_returns_start() {
        let a = Vec2::new(40.0, 40.0);
        let p = colinear_point(a, a, Vec2::new(100.0, 100.0));
        assert_eq!(p, a);
    }

    #[test]
    fn colinear_point_diagonal_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 100.0);

        let p = colinear_point(a, b, Vec2::new(100.0, 0.0));
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn snap_to_grid_rounds_down_to_cell() {
        let grid = Vec2::new(20.0, 20.0);
        assert_eq!(
            snap_to_grid(Vec2::new(47.0, 33.0), grid),
            Vec2::new(40.0, 20.0)
        );
    }

    #[test]
    fn snap_to_grid_keeps_grid_points() {
        let grid = Vec2::new(20.0, 20.0);
        assert_eq!(
            snap_to_grid(Vec2::new(40.0, 60.0), grid),
            Vec2::new(40.0, 60.0)
        );
    }
}
