//! Command-line configuration
//!
//! Defaults match the interactive views: 25 bars, 3 disks, speed 3 and a
//! 10×15 undirected, unweighted grid. Flags are parsed by hand; there are few
//! enough that a table of `match` arms reads better than a builder.

use crate::error::{Result, VizError};
use crate::input::{random_array, random_grid_graph, GridGraph, GridOptions};
use crate::playback::SpeedLevel;
use crate::recorder::{GraphAlgorithm, SortAlgorithm};
use crate::scene::{GraphScene, HanoiScene, Scene, SortingScene};
use crate::structures::StructureKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

pub const ARRAY_SIZE_RANGE: RangeInclusive<usize> = 1..=100;
pub const DISK_RANGE: RangeInclusive<usize> = 1..=10;
pub const GRID_SIDE_RANGE: RangeInclusive<usize> = 2..=30;

pub const USAGE: &str = "\
Usage: algoviz [options]

Options:
  --view <name>        sorting | graph | recursion | structures (default: sorting)
  --algorithm <id>     sorting: bubble, selection, insertion, quick, merge, heap
                       graph: bfs, dfs, dijkstra
                       structures: stack, queue, heap
  --size <n>           number of bars to sort (1-100, default 25)
  --disks <n>          disks for the tower puzzle (1-10, default 3)
  --speed <n>          playback speed level (1-5, default 3)
  --rows <n>           graph grid rows (2-30, default 10)
  --cols <n>           graph grid columns (2-30, default 15)
  --directed           generate a directed graph
  --weighted           generate edge weights 1-9
  --seed <n>           seed the input generator
  --dump               print the recorded steps as JSON and exit
  -h, --help           show this help";

/// Which visualizer the app opens with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Sorting,
    Graph,
    Recursion,
    Structures,
}

impl View {
    pub const ALL: [View; 4] = [View::Sorting, View::Graph, View::Recursion, View::Structures];

    pub fn id(self) -> &'static str {
        match self {
            View::Sorting => "sorting",
            View::Graph => "graph",
            View::Recursion => "recursion",
            View::Structures => "structures",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Sorting => "Sorting",
            View::Graph => "Graph",
            View::Recursion => "Recursion",
            View::Structures => "Data Structures",
        }
    }

    pub fn next(self) -> Self {
        match self {
            View::Sorting => View::Graph,
            View::Graph => View::Recursion,
            View::Recursion => View::Structures,
            View::Structures => View::Sorting,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub view: View,
    pub sort_algorithm: SortAlgorithm,
    pub graph_algorithm: GraphAlgorithm,
    pub structure: StructureKind,
    pub array_size: usize,
    pub disks: u32,
    pub speed: SpeedLevel,
    pub grid: GridOptions,
    pub seed: Option<u64>,
    pub dump: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            view: View::Sorting,
            sort_algorithm: SortAlgorithm::Bubble,
            graph_algorithm: GraphAlgorithm::Bfs,
            structure: StructureKind::Stack,
            array_size: 25,
            disks: 3,
            speed: SpeedLevel::default(),
            grid: GridOptions::default(),
            seed: None,
            dump: false,
            help: false,
        }
    }
}

impl Config {
    /// Parse flags (without the program name)
    pub fn from_args<I>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut algorithm: Option<String> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.help = true,
                "--dump" => config.dump = true,
                "--directed" => config.grid.directed = true,
                "--weighted" => config.grid.weighted = true,
                "--view" => {
                    let value = next_value(&mut args, &arg)?;
                    config.view = View::from_id(&value).ok_or(VizError::UnknownView(value))?;
                }
                "--algorithm" => algorithm = Some(next_value(&mut args, &arg)?),
                "--size" => {
                    config.array_size =
                        parse_bounded(&mut args, &arg, "array size", ARRAY_SIZE_RANGE)?;
                }
                "--disks" => {
                    // Bounded to 10 above, so the cast cannot truncate
                    config.disks = parse_bounded(&mut args, &arg, "disk count", DISK_RANGE)? as u32;
                }
                "--rows" => {
                    config.grid.rows =
                        parse_bounded(&mut args, &arg, "grid rows", GRID_SIDE_RANGE)?;
                }
                "--cols" => {
                    config.grid.cols =
                        parse_bounded(&mut args, &arg, "grid columns", GRID_SIDE_RANGE)?;
                }
                "--speed" => {
                    let level: u8 = parse_number(&mut args, &arg)?;
                    config.speed = SpeedLevel::new(level)?;
                }
                "--seed" => config.seed = Some(parse_number(&mut args, &arg)?),
                _ => return Err(VizError::UnknownOption(arg)),
            }
        }

        if let Some(id) = algorithm {
            config.select_algorithm(&id)?;
        }

        Ok(config)
    }

    /// Input generator, seeded when `--seed` was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn sorting_scene<R: Rng + ?Sized>(&self, rng: &mut R) -> SortingScene {
        SortingScene {
            algorithm: self.sort_algorithm,
            values: random_array(rng, self.array_size),
        }
    }

    pub fn grid_graph<R: Rng + ?Sized>(&self, rng: &mut R) -> GridGraph {
        random_grid_graph(rng, self.grid)
    }

    pub fn hanoi_scene(&self) -> HanoiScene {
        HanoiScene { disks: self.disks }
    }

    /// Scene for the selected view; the structures view records nothing
    pub fn scene<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Scene> {
        match self.view {
            View::Sorting => Some(self.sorting_scene(rng).into()),
            View::Graph => {
                let grid = self.grid_graph(rng);
                Some(GraphScene::from_grid(self.graph_algorithm, grid).into())
            }
            View::Recursion => Some(self.hanoi_scene().into()),
            View::Structures => None,
        }
    }

    /// Apply an algorithm id to the selected view
    fn select_algorithm(&mut self, id: &str) -> Result<()> {
        let unknown = || VizError::UnknownAlgorithm {
            view: self.view.id(),
            id: id.to_string(),
        };
        match self.view {
            View::Sorting => self.sort_algorithm = SortAlgorithm::from_id(id).ok_or_else(unknown)?,
            View::Graph => self.graph_algorithm = GraphAlgorithm::from_id(id).ok_or_else(unknown)?,
            View::Structures => self.structure = StructureKind::from_id(id).ok_or_else(unknown)?,
            View::Recursion => {
                if id != "hanoi" {
                    return Err(unknown());
                }
            }
        }
        Ok(())
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| VizError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T> {
    let value = next_value(args, flag)?;
    value.parse().map_err(|_| VizError::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}

fn parse_bounded(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
    what: &'static str,
    range: RangeInclusive<usize>,
) -> Result<usize> {
    let got: usize = parse_number(args, flag)?;
    if range.contains(&got) {
        Ok(got)
    } else {
        Err(VizError::OutOfRange {
            what,
            min: *range.start(),
            max: *range.end(),
            got,
        })
    }
}
