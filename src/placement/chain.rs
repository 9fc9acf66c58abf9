use std::collections::HashMap;

use crate::math::Point3;
use crate::model::{ModelStore, WallId};

/// Endpoints closer than this are treated as the same chain point.
const POINT_TOLERANCE: f64 = 1e-6;

/// Quantized endpoint coordinates, usable as a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PointKey {
    x: i64,
    y: i64,
    z: i64,
}

impl PointKey {
    #[allow(clippy::cast_possible_truncation)]
    fn new(p: &Point3) -> Self {
        Self {
            x: (p.x / POINT_TOLERANCE).round() as i64,
            y: (p.y / POINT_TOLERANCE).round() as i64,
            z: (p.z / POINT_TOLERANCE).round() as i64,
        }
    }
}

/// Reorders walls into a single endpoint-connected chain.
///
/// The walk starts at the first degree-1 endpoint in input order (an open
/// end), or at the first wall when every point has two incident segments.
/// Branching, cyclic, or disconnected selections cannot be ordered; they
/// produce a warning and the input order is returned unchanged, so
/// callers must tolerate an unordered result.
#[must_use]
pub fn order_chain(
    store: &ModelStore,
    walls: &[WallId],
    warnings: &mut Vec<String>,
) -> Vec<WallId> {
    if walls.len() <= 1 {
        return walls.to_vec();
    }

    let mut infos: Vec<(WallId, PointKey, PointKey)> = Vec::with_capacity(walls.len());
    for &id in walls {
        let Ok(wall) = store.wall(id) else { continue };
        infos.push((
            id,
            PointKey::new(&wall.curve.start_point()),
            PointKey::new(&wall.curve.end_point()),
        ));
    }
    if infos.len() <= 1 {
        return infos.iter().map(|info| info.0).collect();
    }

    let mut incidence: HashMap<PointKey, Vec<usize>> = HashMap::new();
    for (i, info) in infos.iter().enumerate() {
        incidence.entry(info.1).or_default().push(i);
        incidence.entry(info.2).or_default().push(i);
    }

    // Deterministic start: scan endpoints in input order for an open end.
    let mut start_key = None;
    'scan: for info in &infos {
        for key in [info.1, info.2] {
            if incidence.get(&key).map_or(0, Vec::len) == 1 {
                start_key = Some(key);
                break 'scan;
            }
        }
    }

    let start_index = start_key
        .and_then(|key| incidence.get(&key).and_then(|v| v.first().copied()))
        .unwrap_or(0);

    let mut used = vec![false; infos.len()];
    let mut ordered = Vec::with_capacity(infos.len());
    used[start_index] = true;
    ordered.push(infos[start_index].0);

    // Frontier: the endpoint of the start segment that is not the open end.
    let mut frontier = match start_key {
        Some(key) if infos[start_index].1 == key => infos[start_index].2,
        Some(_) => infos[start_index].1,
        None => infos[start_index].2,
    };

    loop {
        let Some(candidates) = incidence.get(&frontier) else { break };
        let Some(&next) = candidates.iter().find(|&&idx| !used[idx]) else {
            break;
        };
        used[next] = true;
        ordered.push(infos[next].0);
        frontier = if infos[next].1 == frontier {
            infos[next].2
        } else {
            infos[next].1
        };
    }

    if ordered.len() != infos.len() {
        warnings.push(
            "Selected walls could not be ordered as a single connected chain; using input order."
                .into(),
        );
        return walls.to_vec();
    }

    ordered
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Curve, Line};
    use crate::model::{LevelData, LevelId, WallData, WallTypeData, WallTypeId};

    fn add_wall(store: &mut ModelStore, wall_type: WallTypeId, level: LevelId, a: (f64, f64), b: (f64, f64)) -> WallId {
        let curve = Curve::Line(
            Line::new(
                Point3::new(a.0, a.1, 0.0),
                Point3::new(b.0, b.1, 0.0),
            )
            .unwrap(),
        );
        store.add_wall(WallData::new(curve, wall_type, level, 3000.0, 0.0, false, false))
    }

    fn setup() -> (ModelStore, WallTypeId, LevelId) {
        let mut store = ModelStore::new();
        let level = store.add_level(LevelData::new("L1", 0.0));
        let wall_type = store.add_wall_type(WallTypeData::basic("Generic", 200.0));
        (store, wall_type, level)
    }

    #[test]
    fn shuffled_open_polyline_is_reordered() {
        let (mut store, wall_type, level) = setup();
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(&mut store, wall_type, level, (10.0, 0.0), (10.0, 10.0));
        let c = add_wall(&mut store, wall_type, level, (10.0, 10.0), (0.0, 10.0));

        let mut warnings = Vec::new();
        let ordered = order_chain(&store, &[b, c, a], &mut warnings);
        assert!(warnings.is_empty());
        // The first open end in input order is c's endpoint (0,10), so the
        // walk runs c -> b -> a.
        assert_eq!(ordered, vec![c, b, a]);
    }

    #[test]
    fn chain_walk_is_a_valid_traversal() {
        let (mut store, wall_type, level) = setup();
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(&mut store, wall_type, level, (10.0, 0.0), (10.0, 10.0));
        let c = add_wall(&mut store, wall_type, level, (10.0, 10.0), (20.0, 10.0));

        let mut warnings = Vec::new();
        let ordered = order_chain(&store, &[c, a, b], &mut warnings);
        assert!(warnings.is_empty());
        // Middle segment must sit between the two open-ended ones.
        assert_eq!(ordered[1], b);
        assert!(ordered == vec![c, b, a] || ordered == vec![a, b, c]);
    }

    #[test]
    fn branching_returns_input_order_with_warning() {
        let (mut store, wall_type, level) = setup();
        // Three walls meeting at the origin: a T/star junction.
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(&mut store, wall_type, level, (0.0, 0.0), (0.0, 10.0));
        let c = add_wall(&mut store, wall_type, level, (0.0, 0.0), (-10.0, 0.0));

        let mut warnings = Vec::new();
        let ordered = order_chain(&store, &[a, b, c], &mut warnings);
        assert_eq!(ordered, vec![a, b, c]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("connected chain"));
    }

    #[test]
    fn disconnected_returns_input_order_with_warning() {
        let (mut store, wall_type, level) = setup();
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(&mut store, wall_type, level, (100.0, 100.0), (110.0, 100.0));

        let mut warnings = Vec::new();
        let ordered = order_chain(&store, &[a, b], &mut warnings);
        assert_eq!(ordered, vec![a, b]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn closed_loop_starts_at_first_wall() {
        let (mut store, wall_type, level) = setup();
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(&mut store, wall_type, level, (10.0, 0.0), (10.0, 10.0));
        let c = add_wall(&mut store, wall_type, level, (10.0, 10.0), (0.0, 0.0));

        let mut warnings = Vec::new();
        // No degree-1 point exists; the walk starts at the first input wall
        // and still visits the whole loop.
        let ordered = order_chain(&store, &[b, a, c], &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(ordered.len(), 3);
        assert_eq!(ordered[0], b);
    }

    #[test]
    fn single_wall_passes_through() {
        let (mut store, wall_type, level) = setup();
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let mut warnings = Vec::new();
        assert_eq!(order_chain(&store, &[a], &mut warnings), vec![a]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn near_coincident_endpoints_connect() {
        let (mut store, wall_type, level) = setup();
        // Endpoints differ by less than the chain tolerance.
        let a = add_wall(&mut store, wall_type, level, (0.0, 0.0), (10.0, 0.0));
        let b = add_wall(
            &mut store,
            wall_type,
            level,
            (10.0 + 1e-8, 1e-8),
            (10.0, 10.0),
        );
        let mut warnings = Vec::new();
        let ordered = order_chain(&store, &[b, a], &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(ordered.len(), 2);
    }
}
