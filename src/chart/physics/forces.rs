use eframe::egui::{Vec2, vec2};

use super::super::node::Node;

// Pairs closer than one pixel are treated as one pixel apart, keeping the
// inverse-square term bounded.
const DISTANCE_MIN_SQ: f32 = 1.0;

fn charge(radius: f32, strength: f32) -> f32 {
    radius * radius * strength
}

fn separation(delta: Vec2, from: usize, to: usize) -> (Vec2, f32) {
    let distance_sq = delta.length_sq();
    if distance_sq >= DISTANCE_MIN_SQ {
        return (delta, distance_sq);
    }

    // Coincident bubbles get a deterministic jitter direction so they
    // separate instead of stalling on a zero-length delta.
    let angle = ((from as f32) * 0.618_034 + (to as f32) * 0.414_214) * std::f32::consts::TAU;
    (vec2(angle.cos(), angle.sin()), DISTANCE_MIN_SQ)
}

/// Pairwise many-body repulsion: each neighbour pushes a node along their
/// separation with magnitude charge / distance, charge being radius
/// squared times the strength coefficient. Larger bubbles repel harder.
pub(super) fn accumulate_charge(nodes: &[Node], strength: f32, alpha: f32, pulls: &mut Vec<Vec2>) {
    pulls.clear();
    pulls.resize(nodes.len(), Vec2::ZERO);

    for first in 0..nodes.len() {
        for second in (first + 1)..nodes.len() {
            let (delta, distance_sq) =
                separation(nodes[first].pos - nodes[second].pos, first, second);

            let push_on_first = charge(nodes[second].radius, strength) * alpha / distance_sq;
            let push_on_second = charge(nodes[first].radius, strength) * alpha / distance_sq;
            pulls[first] += delta * push_on_first;
            pulls[second] -= delta * push_on_second;
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use crate::data::Region;

    use super::*;

    fn node(x: f32, y: f32, radius: f32) -> Node {
        Node {
            rank: 0,
            radius,
            value: 0.0,
            name: String::new(),
            artist: String::new(),
            region: Region::Other,
            year: 2019,
            pos: vec2(x, y),
            velocity: Vec2::ZERO,
        }
    }

    #[test]
    fn neighbours_repel_along_their_separation() {
        let nodes = vec![node(0.0, 0.0, 10.0), node(50.0, 0.0, 10.0)];
        let mut pulls = Vec::new();
        accumulate_charge(&nodes, 0.2, 1.0, &mut pulls);

        assert!(pulls[0].x < 0.0);
        assert!(pulls[1].x > 0.0);
        assert_eq!(pulls[0].y, 0.0);
    }

    #[test]
    fn larger_bubbles_repel_more_strongly() {
        let nodes = vec![node(0.0, 0.0, 5.0), node(50.0, 0.0, 40.0), node(100.0, 0.0, 5.0)];
        let mut pulls = Vec::new();
        accumulate_charge(&nodes, 0.2, 1.0, &mut pulls);

        // The middle bubble is four times closer in radius terms to both
        // neighbours; the outer small bubbles feel a stronger push than
        // the big one does from either side alone.
        let small_push = pulls[0].length();
        let nodes_small = vec![node(0.0, 0.0, 5.0), node(50.0, 0.0, 5.0), node(100.0, 0.0, 5.0)];
        let mut pulls_small = Vec::new();
        accumulate_charge(&nodes_small, 0.2, 1.0, &mut pulls_small);
        assert!(small_push > pulls_small[0].length());
    }

    #[test]
    fn pushes_scale_with_alpha() {
        let nodes = vec![node(0.0, 0.0, 10.0), node(50.0, 0.0, 10.0)];
        let mut full = Vec::new();
        let mut half = Vec::new();
        accumulate_charge(&nodes, 0.2, 1.0, &mut full);
        accumulate_charge(&nodes, 0.2, 0.5, &mut half);

        assert!((full[0].length() - 2.0 * half[0].length()).abs() < 1.0e-4);
    }

    #[test]
    fn coincident_pairs_get_a_nonzero_push() {
        let nodes = vec![node(10.0, 10.0, 10.0), node(10.0, 10.0, 10.0)];
        let mut pulls = Vec::new();
        accumulate_charge(&nodes, 0.2, 1.0, &mut pulls);

        assert!(pulls[0].length() > 0.0);
        assert!(pulls[1].length() > 0.0);
    }
}
