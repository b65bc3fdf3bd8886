mod forces;

use eframe::egui::Vec2;

use crate::data::Region;

use super::chart_center;
use super::mode::region_center_x;
use super::node::Node;
use forces::accumulate_charge;

/// Layout is considered settled once alpha decays below this.
const ALPHA_MIN: f32 = 0.001;
// 1 - 0.001^(1/300): alpha reaches the floor after roughly 300 ticks.
const ALPHA_DECAY: f32 = 0.022_877;
const VELOCITY_DECAY: f32 = 0.2;
const PULL_STRENGTH: f32 = 0.2;

/// Target of the horizontal centering force.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum XTarget {
    /// Grouped mode: one shared x for every node.
    Center(f32),
    /// Split mode: per-node x derived from the node's origin region.
    RegionCenters,
}

impl XTarget {
    fn resolve(self, region: Region) -> f32 {
        match self {
            Self::Center(x) => x,
            Self::RegionCenters => region_center_x(region),
        }
    }
}

/// The force layout engine: a decaying-velocity integrator over one node
/// collection. Each `tick` applies the x/y centering pulls and the
/// pairwise charge repulsion to every node's velocity, then integrates
/// positions. Axis-decomposed declutter heuristics, not real dynamics.
pub struct Simulation {
    nodes: Vec<Node>,
    alpha: f32,
    running: bool,
    x_target: XTarget,
    x_strength: f32,
    y_center: f32,
    y_strength: f32,
    pulls: Vec<Vec2>,
}

impl Simulation {
    /// Binds a node collection. The engine starts stopped at full energy;
    /// callers configure the x force and `restart` to begin ticking.
    pub fn new(nodes: Vec<Node>) -> Self {
        let center = chart_center();
        Self {
            nodes,
            alpha: 1.0,
            running: false,
            x_target: XTarget::Center(center.x),
            x_strength: PULL_STRENGTH,
            y_center: center.y,
            y_strength: PULL_STRENGTH,
            pulls: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(super) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[cfg(test)]
    pub(super) fn x_target(&self) -> XTarget {
        self.x_target
    }

    #[cfg(test)]
    pub(super) fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Swaps the horizontal force without rebuilding the engine. Takes
    /// effect on the next tick; callers normally pair it with `restart`.
    pub fn set_x_target(&mut self, target: XTarget) {
        self.x_target = target;
    }

    /// Halts ticking. Accumulated positions are kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resets the simulation energy and resumes ticking, so the layout
    /// visibly re-settles after a force reconfiguration.
    pub fn restart(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
        self.running = true;
    }

    /// One integration step. Host-agnostic: any loop may call this, real
    /// timer or not. Returns the remaining alpha; once it falls below the
    /// settle threshold the engine stops itself.
    pub fn tick(&mut self) -> f32 {
        if !self.running {
            return self.alpha;
        }

        self.alpha += (0.0 - self.alpha) * ALPHA_DECAY;
        if self.alpha < ALPHA_MIN {
            self.running = false;
            return self.alpha;
        }

        let alpha = self.alpha;
        for node in &mut self.nodes {
            let target_x = self.x_target.resolve(node.region);
            node.velocity.x += (target_x - node.pos.x) * self.x_strength * alpha;
            node.velocity.y += (self.y_center - node.pos.y) * self.y_strength * alpha;
        }

        // The charge coefficient doubles as the y pull strength.
        accumulate_charge(&self.nodes, self.y_strength, alpha, &mut self.pulls);
        for (node, pull) in self.nodes.iter_mut().zip(&self.pulls) {
            node.velocity += *pull;
        }

        for node in &mut self.nodes {
            node.velocity *= 1.0 - VELOCITY_DECAY;
            node.pos += node.velocity;
        }

        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::super::CHART_WIDTH;
    use super::super::node::{build_nodes, tests::record};
    use super::*;

    fn five_node_simulation() -> Simulation {
        let records = vec![
            record(1, 100.0, Region::European, 2019),
            record(2, 90.0, Region::American, 2019),
            record(3, 80.0, Region::AfricanCaribbean, 2018),
            record(4, 70.0, Region::Other, 2018),
            record(5, 60.0, Region::European, 2017),
        ];
        Simulation::new(build_nodes(&records, 2.0))
    }

    fn settle(simulation: &mut Simulation, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while simulation.is_running() && ticks < max_ticks {
            simulation.tick();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn alpha_decays_below_the_settle_threshold() {
        let mut simulation = five_node_simulation();
        simulation.restart(1.0);

        let ticks = settle(&mut simulation, 500);
        assert!(ticks < 500, "simulation never settled");
        assert!(simulation.alpha() < ALPHA_MIN);
        assert!(!simulation.is_running());
    }

    #[test]
    fn ticking_a_stopped_simulation_moves_nothing() {
        let mut simulation = five_node_simulation();
        simulation.restart(1.0);
        simulation.tick();
        simulation.stop();

        let positions = simulation
            .nodes()
            .iter()
            .map(|node| node.pos)
            .collect::<Vec<_>>();
        simulation.tick();

        for (node, position) in simulation.nodes().iter().zip(positions) {
            assert_eq!(node.pos, position);
        }
    }

    #[test]
    fn restart_resumes_after_settling() {
        let mut simulation = five_node_simulation();
        simulation.restart(1.0);
        settle(&mut simulation, 500);

        simulation.restart(1.0);
        assert!(simulation.is_running());
        assert_eq!(simulation.alpha(), 1.0);
    }

    #[test]
    fn grouped_layout_converges_toward_the_shared_center() {
        let mut simulation = five_node_simulation();
        let center = chart_center();
        simulation.set_x_target(XTarget::Center(center.x));
        simulation.restart(1.0);
        settle(&mut simulation, 500);

        let spread: f32 = simulation.nodes().iter().map(|node| node.radius).sum();
        for node in simulation.nodes() {
            assert!(
                (node.pos.x - center.x).abs() < spread,
                "node x {} strayed from center {}",
                node.pos.x,
                center.x
            );
            assert!((node.pos.y - center.y).abs() < spread);
        }
    }

    #[test]
    fn split_layout_separates_region_clusters() {
        let mut simulation = five_node_simulation();
        simulation.set_x_target(XTarget::RegionCenters);
        simulation.restart(1.0);
        settle(&mut simulation, 500);

        let mean_x = |region: Region| {
            let members = simulation
                .nodes()
                .iter()
                .filter(|node| node.region == region)
                .collect::<Vec<_>>();
            members.iter().map(|node| node.pos.x).sum::<f32>() / members.len() as f32
        };

        let european = mean_x(Region::European);
        let american = mean_x(Region::American);
        let other = mean_x(Region::Other);

        assert!(european < american, "{european} vs {american}");
        assert!(american < other, "{american} vs {other}");
        assert!((european - region_center_x(Region::European)).abs() < CHART_WIDTH / 6.0);
    }

    #[test]
    fn coincident_nodes_are_pushed_apart() {
        let records = vec![
            record(1, 100.0, Region::American, 2019),
            record(2, 100.0, Region::American, 2019),
        ];
        let mut nodes = build_nodes(&records, 2.0);
        let origin = vec2(470.0, 300.0);
        for node in &mut nodes {
            node.pos = origin;
        }

        let mut simulation = Simulation::new(nodes);
        simulation.restart(1.0);
        settle(&mut simulation, 500);

        let [first, second] = simulation.nodes() else {
            panic!("expected two nodes");
        };
        let gap = (first.pos - second.pos).length();
        assert!(gap > 1.0, "coincident bubbles never separated: gap {gap}");
    }

    #[test]
    fn empty_collection_ticks_harmlessly() {
        let mut simulation = Simulation::new(Vec::new());
        simulation.restart(1.0);
        for _ in 0..400 {
            simulation.tick();
        }
        assert!(!simulation.is_running());
    }
}
