//! Main TUI application state and logic

use crate::config::{Config, View, DISK_RANGE};
use crate::input::{random_array, random_value};
use crate::playback::{PlaybackController, PlaybackState};
use crate::recorder::path_weight;
use crate::scene::{GraphScene, HanoiScene, Scene, SortingScene};
use crate::step::{SortStats, Step, Value};
use crate::structures::{
    LiveStructure, MinHeap, Operation, Outcome, Queue, Stack, StructureKind,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{self, GraphLayout, GraphRenderData, InfoRenderData};

/// Longest value that can be typed in the structures view
const MAX_ENTRY_DIGITS: usize = 4;

/// The main application state
pub struct App {
    /// View on screen
    pub view: View,

    /// Playback over the active view's scene
    pub controller: PlaybackController<Scene>,

    /// Last scene of each recorded view; the active one lives in the controller
    sorting: SortingScene,
    graph: GraphScene,
    hanoi: HanoiScene,

    /// Grid shape of the graph scene
    graph_layout: GraphLayout,

    config: Config,
    rng: StdRng,

    /// Structure shown in the structures view
    pub structure: StructureKind,
    stack: Stack<Value>,
    queue: Queue<Value>,
    heap: MinHeap<Value>,
    /// Digits typed before `i`; empty means insert a random value
    value_entry: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut rng = config.rng();
        let sorting = config.sorting_scene(&mut rng);
        let grid = config.grid_graph(&mut rng);
        let graph_layout = GraphLayout {
            rows: grid.rows,
            cols: grid.cols,
            directed: config.grid.directed,
            weighted: config.grid.weighted,
        };
        let graph = GraphScene::from_grid(config.graph_algorithm, grid);
        let hanoi = config.hanoi_scene();

        let initial = match config.view {
            View::Graph => Scene::from(graph.clone()),
            View::Recursion => Scene::from(hanoi),
            View::Sorting | View::Structures => Scene::from(sorting.clone()),
        };

        App {
            view: config.view,
            controller: PlaybackController::with_speed(initial, config.speed),
            sorting,
            graph,
            hanoi,
            graph_layout,
            structure: config.structure,
            config,
            rng,
            stack: Stack::new(),
            queue: Queue::new(),
            heap: MinHeap::new(),
            value_entry: String::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_frame = Instant::now();

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            let fired = self.controller.advance(now.duration_since(last_frame));
            last_frame = now;
            if fired > 0 && self.controller.state() == PlaybackState::Completed {
                self.status_message = "Playback complete".to_string();
            }

            // Use poll with timeout so playback keeps moving without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.controller.teardown();
        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        if self.view == View::Structures {
            let snapshot = self.live_structure().query();
            panes::render_structure_pane(frame, columns[0], self.structure, &snapshot);
            panes::render_info_pane(frame, columns[1], self.structure_info());
        } else {
            self.render_scene(frame, columns[0]);
            panes::render_info_pane(frame, columns[1], self.scene_info());
        }

        panes::render_status_bar(
            frame,
            main_chunks[1],
            self.view,
            &self.status_message,
            self.controller.current_index(),
            self.controller.len(),
            self.controller.state(),
        );
    }

    fn render_scene(&self, frame: &mut Frame, area: Rect) {
        let scene = self.controller.scene();
        let preview;
        let step = match self.controller.current_step() {
            Some(step) => step,
            None => {
                preview = scene.preview();
                &preview
            }
        };
        let title = format!(" {}: {} ", self.view.title(), scene.info().name);

        match (scene, step) {
            (_, Step::Sort(step)) => panes::render_bars_pane(frame, area, title, step),
            (Scene::Graph(graph), Step::Graph(step)) => panes::render_graph_pane(
                frame,
                area,
                title,
                GraphRenderData {
                    graph: &graph.graph,
                    layout: self.graph_layout,
                    start: graph.start,
                    target: graph.target,
                    step,
                },
            ),
            (_, Step::Recursion(step)) => panes::render_towers_pane(frame, area, title, step),
            (_, Step::Graph(_)) => {}
        }
    }

    fn scene_info(&self) -> InfoRenderData<'static> {
        let info = self.controller.scene().info();
        let speed = self.controller.speed();
        let details = vec![
            ("Time", info.time_complexity.to_string()),
            ("Space", info.space_complexity.to_string()),
            (
                "Speed",
                format!(
                    "{} ({}, {} ms)",
                    speed.level(),
                    speed.label(),
                    speed.delay().as_millis()
                ),
            ),
        ];

        let mut stats = vec![("State", self.controller.state().label().to_string())];
        let index = self.controller.current_index();
        let step = self.controller.current_step();

        match self.controller.scene() {
            Scene::Sorting(scene) => {
                stats.push(("Size", scene.values.len().to_string()));
                if let Some(sequence) = self.controller.sequence() {
                    let counts = SortStats::tally(
                        sequence.iter().take(index + 1).filter_map(Step::as_sort),
                    );
                    stats.push(("Comparisons", counts.comparisons.to_string()));
                    stats.push(("Swaps", counts.swaps.to_string()));
                }
            }
            Scene::Graph(scene) => {
                stats.push(("Nodes", scene.graph.node_count().to_string()));
                stats.push(("Edges", scene.graph.edge_count().to_string()));
                if let Some(Step::Graph(step)) = step {
                    stats.push(("Visited", step.visited.len().to_string()));
                    let path = if !step.path.is_empty() {
                        let weight = path_weight(&scene.graph, &step.path)
                            .map_or_else(|| "?".to_string(), |w| w.to_string());
                        format!("{} nodes, weight {}", step.path.len(), weight)
                    } else if self.controller.state() == PlaybackState::Completed {
                        "not found".to_string()
                    } else {
                        "-".to_string()
                    };
                    stats.push(("Path", path));
                }
            }
            Scene::Hanoi(scene) => {
                stats.push(("Disks", scene.disks.to_string()));
                let total = self.controller.len().saturating_sub(1);
                stats.push(("Moves", format!("{}/{}", index, total)));
            }
        }

        InfoRenderData {
            name: info.name,
            summary: info.summary,
            details,
            stats,
        }
    }

    fn structure_info(&self) -> InfoRenderData<'static> {
        let kind = self.structure;
        let [insert, remove, peek] = kind.verbs();
        let structure = self.live_structure();
        InfoRenderData {
            name: kind.name(),
            summary: kind.summary(),
            details: vec![
                ("Cost", kind.complexity().to_string()),
                ("Keys", format!("i {}, x {}, p {}", insert, remove, peek)),
                ("Input", "type digits, then i".to_string()),
            ],
            stats: vec![
                ("Size", structure.len().to_string()),
                ("Empty", structure.is_empty().to_string()),
                (
                    "Value",
                    if self.value_entry.is_empty() {
                        "random".to_string()
                    } else {
                        self.value_entry.clone()
                    },
                ),
            ],
        }
    }

    fn live_structure(&self) -> &dyn LiveStructure<Item = Value> {
        match self.structure {
            StructureKind::Stack => &self.stack,
            StructureKind::Queue => &self.queue,
            StructureKind::MinHeap => &self.heap,
        }
    }

    fn live_structure_mut(&mut self) -> &mut dyn LiveStructure<Item = Value> {
        match self.structure {
            StructureKind::Stack => &mut self.stack,
            StructureKind::Queue => &mut self.queue,
            StructureKind::MinHeap => &mut self.heap,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.controller.teardown();
                self.should_quit = true;
            }
            KeyCode::Tab => self.switch_view(),
            _ if self.view == View::Structures => self.handle_structure_key(key),
            KeyCode::Char(' ') => {
                self.controller.toggle();
                self.status_message = match self.controller.state() {
                    PlaybackState::Playing => "Playing...".to_string(),
                    PlaybackState::Paused => "Paused".to_string(),
                    PlaybackState::Completed => "Playback complete, press r to reset".to_string(),
                    PlaybackState::Idle => "Ready!".to_string(),
                };
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Right => {
                self.status_message = if self.controller.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Left => {
                self.status_message = if self.controller.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Home => {
                self.controller.seek(0);
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.controller.set_speed(self.controller.speed().faster());
                self.status_message = format!("Speed: {}", self.controller.speed());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.controller.set_speed(self.controller.speed().slower());
                self.status_message = format!("Speed: {}", self.controller.speed());
            }
            KeyCode::Char('a') => {
                self.controller.update_scene(Scene::select_next_algorithm);
                self.status_message = format!("Algorithm: {}", self.controller.scene().info().name);
            }
            KeyCode::Char('n') => self.new_input(),
            _ => {}
        }
    }

    fn handle_structure_key(&mut self, key: KeyEvent) {
        let [insert, remove, peek] = self.structure.verbs();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.value_entry.len() < MAX_ENTRY_DIGITS {
                    self.value_entry.push(c);
                }
                self.status_message = format!("Value: {}", self.value_entry);
            }
            KeyCode::Backspace => {
                self.value_entry.pop();
                self.status_message = format!("Value: {}", self.value_entry);
            }
            KeyCode::Esc => {
                self.value_entry.clear();
                self.status_message = "Value cleared".to_string();
            }
            KeyCode::Char('i') => {
                let value = match self.take_entry() {
                    Some(value) => value,
                    None => random_value(&mut self.rng),
                };
                self.live_structure_mut().operate(Operation::Insert(value));
                self.status_message = format!("{} {}", insert, value);
            }
            KeyCode::Char('x') => {
                self.status_message = match self.live_structure_mut().operate(Operation::Remove) {
                    Outcome::Removed(value) => format!("{} → {}", remove, value),
                    _ => format!("Cannot {}: {} is empty", remove, self.structure.id()),
                };
            }
            KeyCode::Char('p') => {
                self.status_message = match self.live_structure_mut().operate(Operation::Peek) {
                    Outcome::Peeked(value) => format!("{} → {}", peek, value),
                    _ => format!("Cannot {}: {} is empty", peek, self.structure.id()),
                };
            }
            KeyCode::Char('s') => {
                self.structure = self.structure.next();
                self.status_message = format!("Structure: {}", self.structure.name());
            }
            KeyCode::Char('c') => {
                self.live_structure_mut().clear();
                self.status_message = format!("Cleared {}", self.structure.id());
            }
            _ => {}
        }
    }

    /// Typed value, if any; the entry is cleared either way
    fn take_entry(&mut self) -> Option<Value> {
        let value = self.value_entry.parse().ok();
        self.value_entry.clear();
        value
    }

    /// Cycle to the next view, parking the scene of the one being left
    fn switch_view(&mut self) {
        self.controller.teardown();
        self.view = self.view.next();

        let scene = match self.view {
            View::Sorting => Scene::from(self.sorting.clone()),
            View::Graph => Scene::from(self.graph.clone()),
            View::Recursion => Scene::from(self.hanoi),
            View::Structures => {
                self.status_message = format!("View: {}", self.view.title());
                return;
            }
        };
        let previous = self.controller.replace_scene(scene);
        self.park(previous);
        self.status_message = format!("View: {}", self.view.title());
    }

    fn park(&mut self, scene: Scene) {
        match scene {
            Scene::Sorting(scene) => self.sorting = scene,
            Scene::Graph(scene) => self.graph = scene,
            Scene::Hanoi(scene) => self.hanoi = scene,
        }
    }

    /// Fresh input for the active scene, keeping its algorithm
    fn new_input(&mut self) {
        let scene = match self.controller.scene() {
            Scene::Sorting(scene) => Scene::from(SortingScene {
                algorithm: scene.algorithm,
                values: random_array(&mut self.rng, self.config.array_size),
            }),
            Scene::Graph(scene) => {
                let grid = self.config.grid_graph(&mut self.rng);
                self.graph_layout.rows = grid.rows;
                self.graph_layout.cols = grid.cols;
                Scene::from(GraphScene::from_grid(scene.algorithm, grid))
            }
            Scene::Hanoi(scene) => {
                let max = *DISK_RANGE.end() as u32;
                let disks = if scene.disks >= max { 1 } else { scene.disks + 1 };
                Scene::from(HanoiScene { disks })
            }
        };
        self.controller.replace_scene(scene);
        self.status_message = "New input".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(args: &[&str]) -> App {
        let mut full = vec!["--seed", "1"];
        full.extend_from_slice(args);
        let config = Config::from_args(full.iter().map(|s| s.to_string())).unwrap();
        App::new(config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn draw(app: &App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_space_toggles_playback() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state(), PlaybackState::Playing);
        assert!(app.controller.sequence().is_some());
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_algorithm_key_discards_recording() {
        let mut app = app(&[]);
        press(&mut app, KeyCode::Right);
        assert!(app.controller.sequence().is_some());
        press(&mut app, KeyCode::Char('a'));
        assert!(app.controller.sequence().is_none());
        assert_eq!(app.controller.current_index(), 0);
    }

    #[test]
    fn test_view_switch_keeps_parked_scenes() {
        let mut app = app(&[]);
        let values = match app.controller.scene() {
            Scene::Sorting(scene) => scene.values.clone(),
            other => panic!("expected sorting, got {:?}", other),
        };

        for _ in 0..View::ALL.len() {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.view, View::Sorting);
        match app.controller.scene() {
            Scene::Sorting(scene) => assert_eq!(scene.values, values),
            other => panic!("expected sorting, got {:?}", other),
        }
    }

    #[test]
    fn test_new_hanoi_input_cycles_disks() {
        let mut app = app(&["--view", "recursion", "--disks", "10"]);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.scene(), &Scene::from(HanoiScene { disks: 1 }));
    }

    #[test]
    fn test_structure_keys() {
        let mut app = app(&["--view", "structures"]);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.contains("empty"));

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.live_structure().len(), 2);
        draw(&app);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.structure, StructureKind::Queue);
        assert!(app.live_structure().is_empty());

        // Playback keys do nothing here
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_typed_value_is_inserted() {
        let mut app = app(&["--view", "structures"]);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.stack.peek(), Some(&42));
        assert!(app.value_entry.is_empty());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('7'));
        draw(&app);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.stack.peek(), Some(&17));
        assert_eq!(app.stack.size(), 2);
    }

    #[test]
    fn test_value_entry_is_bounded() {
        let mut app = app(&["--view", "structures"]);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('9'));
        }
        assert_eq!(app.value_entry, "9999");

        press(&mut app, KeyCode::Esc);
        assert!(app.value_entry.is_empty());
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.stack.size(), 1);
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = app(&["--weighted", "--directed"]);
        for _ in View::ALL {
            draw(&app);
            press(&mut app, KeyCode::End);
            draw(&app);
            press(&mut app, KeyCode::Tab);
        }
    }
}
