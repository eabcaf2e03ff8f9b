//! Scenes: what a playback controller records from
//!
//! A scene bundles the selected algorithm with its input data. The controller
//! owns one scene and asks it for a [`StepSequence`] lazily, the first time
//! playback needs one after the scene changed.

use crate::input::GridGraph;
use crate::recorder::{
    initial_towers, tower_of_hanoi_steps, AdjacencyList, AlgorithmInfo, GraphAlgorithm,
    SortAlgorithm, TOWER_OF_HANOI,
};
use crate::step::{GraphStep, NodeId, RecursionStep, SortStep, Step, StepSequence, Value};
use std::collections::BTreeSet;

/// Anything that can produce a fresh recording of itself
pub trait StepSource {
    type Step;

    /// Run the recorder synchronously
    fn record(&self) -> StepSequence<Self::Step>;
}

/// Array sort over fixed input values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingScene {
    pub algorithm: SortAlgorithm,
    pub values: Vec<Value>,
}

impl StepSource for SortingScene {
    type Step = SortStep;

    fn record(&self) -> StepSequence<SortStep> {
        self.algorithm.record(&self.values)
    }
}

/// Graph traversal from `start`, optionally towards `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphScene {
    pub algorithm: GraphAlgorithm,
    pub graph: AdjacencyList,
    pub start: NodeId,
    pub target: Option<NodeId>,
}

impl GraphScene {
    pub fn from_grid(algorithm: GraphAlgorithm, grid: GridGraph) -> Self {
        GraphScene {
            algorithm,
            graph: grid.graph,
            start: grid.start,
            target: grid.target,
        }
    }
}

impl StepSource for GraphScene {
    type Step = GraphStep;

    fn record(&self) -> StepSequence<GraphStep> {
        self.algorithm.record(&self.graph, self.start, self.target)
    }
}

/// Disk puzzle with `disks` disks on the first peg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiScene {
    pub disks: u32,
}

impl StepSource for HanoiScene {
    type Step = RecursionStep;

    fn record(&self) -> StepSequence<RecursionStep> {
        tower_of_hanoi_steps(self.disks)
    }
}

/// Any recorded scene; records into the tagged [`Step`] union
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    Sorting(SortingScene),
    Graph(GraphScene),
    Hanoi(HanoiScene),
}

impl Scene {
    pub fn info(&self) -> AlgorithmInfo {
        match self {
            Scene::Sorting(scene) => scene.algorithm.info(),
            Scene::Graph(scene) => scene.algorithm.info(),
            Scene::Hanoi(_) => TOWER_OF_HANOI,
        }
    }

    /// Switch to the next algorithm of the same domain
    pub fn select_next_algorithm(&mut self) {
        match self {
            Scene::Sorting(scene) => scene.algorithm = scene.algorithm.next(),
            Scene::Graph(scene) => scene.algorithm = scene.algorithm.next(),
            Scene::Hanoi(_) => {}
        }
    }

    /// The input as it looks before anything was recorded
    pub fn preview(&self) -> Step {
        match self {
            Scene::Sorting(scene) => Step::Sort(SortStep {
                array: scene.values.clone(),
                comparing: Vec::new(),
                swapping: Vec::new(),
                sorted: BTreeSet::new(),
            }),
            Scene::Graph(_) => Step::Graph(GraphStep {
                visited: Vec::new(),
                path: Vec::new(),
            }),
            Scene::Hanoi(scene) => Step::Recursion(initial_towers(scene.disks)),
        }
    }
}

impl StepSource for Scene {
    type Step = Step;

    fn record(&self) -> StepSequence<Step> {
        match self {
            Scene::Sorting(scene) => scene.record().into_tagged(),
            Scene::Graph(scene) => scene.record().into_tagged(),
            Scene::Hanoi(scene) => scene.record().into_tagged(),
        }
    }
}

impl From<SortingScene> for Scene {
    fn from(scene: SortingScene) -> Self {
        Scene::Sorting(scene)
    }
}

impl From<GraphScene> for Scene {
    fn from(scene: GraphScene) -> Self {
        Scene::Graph(scene)
    }
}

impl From<HanoiScene> for Scene {
    fn from(scene: HanoiScene) -> Self {
        Scene::Hanoi(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackController;

    #[test]
    fn test_scene_records_tagged_steps() {
        let scene = Scene::from(HanoiScene { disks: 2 });
        let seq = scene.record();
        assert_eq!(seq.len(), 4);
        assert!(matches!(seq[0], Step::Recursion(_)));
        assert_eq!(scene.preview(), seq[0]);
    }

    #[test]
    fn test_next_algorithm_invalidates_recording() {
        let scene = Scene::from(SortingScene {
            algorithm: SortAlgorithm::Bubble,
            values: vec![3, 1, 2],
        });
        let mut ctl = PlaybackController::new(scene);
        ctl.play();
        assert!(ctl.sequence().is_some());

        ctl.update_scene(Scene::select_next_algorithm);
        assert!(ctl.sequence().is_none());
        assert_eq!(ctl.scene().info().name, SortAlgorithm::Selection.name());
    }
}
