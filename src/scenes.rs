//! Demo scenes built from the layout primitives
//!
//! Each scene lays out a handful of boxes on a canvas and tags them with a
//! fill role. Scenes are pure geometry; colors are applied by the renderer.

use log::debug;

use crate::layout::{union, xy, GroupAlign, LayoutConfig, Nodes, Rect, Slice, Wrapper};

/// Height of the status bar in the `status` scene
const BAR_HEIGHT: i32 = 10;

/// Size of each box placed by the `wrap` scene
const WRAP_ITEM: (i32, i32) = (20, 20);

/// Number of boxes the `wrap` scene tries to place
const WRAP_ITEMS: usize = 8;

/// A filled rectangle in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub rect: Rect<i32>,
    /// Stylesheet role used to color the rectangle
    pub role: String,
    /// Optional identifier emitted as the element id
    pub label: Option<String>,
}

impl Fill {
    pub fn new(rect: Rect<i32>, role: impl Into<String>) -> Self {
        Self {
            rect,
            role: role.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A laid-out scene: canvas bounds and fills painted in order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: &'static str,
    pub bounds: Rect<i32>,
    pub fills: Vec<Fill>,
}

impl Scene {
    fn new(name: &'static str, config: &LayoutConfig) -> Self {
        let (w, h) = config.canvas;
        Self {
            name,
            bounds: Rect::wh(w, h),
            fills: Vec::new(),
        }
    }

    fn fill(&mut self, rect: Rect<i32>, role: &str) {
        self.fills.push(Fill::new(rect, role));
    }

    fn fill_labeled(&mut self, rect: Rect<i32>, role: &str, label: impl Into<String>) {
        self.fills.push(Fill::new(rect, role).with_label(label));
    }

    /// Fill tagged with `label`, if any
    pub fn find(&self, label: &str) -> Option<&Fill> {
        self.fills
            .iter()
            .find(|f| f.label.as_deref() == Some(label))
    }
}

type SceneBuilder = fn(&LayoutConfig) -> Scene;

const SCENES: &[(&str, SceneBuilder)] = &[
    ("inset", inset),
    ("status", status),
    ("wrap", wrap),
    ("title", title),
    ("linked", linked),
];

/// Names of the available scenes, in presentation order
pub fn scene_names() -> Vec<&'static str> {
    SCENES.iter().map(|(name, _)| *name).collect()
}

/// Build the scene called `name`
pub fn build_scene(name: &str, config: &LayoutConfig) -> Option<Scene> {
    let (_, build) = SCENES.iter().find(|(n, _)| *n == name)?;
    let scene = build(config);
    debug!("scene {} has {} fills", scene.name, scene.fills.len());
    Some(scene)
}

/// The canvas with a margin-inset frame
pub fn inset(config: &LayoutConfig) -> Scene {
    let mut scene = Scene::new("inset", config);
    let screen = scene.bounds;
    scene.fill(screen, "screen");
    scene.fill_labeled(screen.inset(config.margin), "accent", "frame");
    scene
}

/// A status bar with a centered title above a content area holding a
/// portrait in the top-left and a button in the bottom-right
pub fn status(config: &LayoutConfig) -> Scene {
    let mut scene = Scene::new("status", config);
    let (bar, screen) = scene.bounds.cut_top(BAR_HEIGHT);
    let content = screen.inset(config.margin);

    let title = Rect::wh(30, BAR_HEIGHT).center_of(&bar);
    let portrait = Rect::wh(20, 30).nest(&content, 0.0, 0.0);
    let button = Rect::wh(20, 10).nest(&content, 1.0, 1.0);

    scene.fill(screen, "screen");
    scene.fill_labeled(bar, "panel", "bar");
    scene.fill_labeled(title, "accent", "title");
    scene.fill_labeled(portrait, "muted", "portrait");
    scene.fill_labeled(button, "item", "button");
    scene
}

/// Equal boxes flowing through the inset canvas until one does not fit
pub fn wrap(config: &LayoutConfig) -> Scene {
    let mut scene = Scene::new("wrap", config);
    let screen = scene.bounds;
    let mut wrapper = Wrapper::from_config(screen.inset(config.margin), &config.flow);
    let (w, h) = WRAP_ITEM;
    let placed = wrapper.extend(std::iter::repeat(Rect::wh(w, h)).take(WRAP_ITEMS));
    debug!("wrap placed {placed} of {WRAP_ITEMS} boxes");

    scene.fill(screen, "screen");
    for (i, r) in wrapper.rects().iter().enumerate() {
        scene.fill_labeled(*r, "item", format!("item-{i}"));
    }
    scene
}

/// A logo in the upper half and a vertical button menu in the lower half,
/// framed by a panel around the buttons
pub fn title(config: &LayoutConfig) -> Scene {
    let mut scene = Scene::new("title", config);
    let screen = scene.bounds;
    let pad = config.margin / 2;
    let (logo_area, menu_area) = screen.cut_top_by_rate(0.5);
    let logo = Rect::wh(60, 30).center_of(&logo_area);
    let menu = menu_area.inset(pad);

    let gap = xy(0, config.spacing);
    let new_game = Rect::wh(30, 8).nest(&menu, 0.5, 0.0);
    let resume = Rect::wh(30, 8).stack_y(&new_game, 0.5, 1.0).add(gap);
    let exit = Rect::wh(30, 8).stack_y(&resume, 0.5, 1.0).add(gap);
    let buttons = Slice::from(vec![new_game, resume, exit]);
    let panel = buttons.outset(pad);
    debug!("title menu spans {}", union(buttons.iter().copied()));

    scene.fill(screen, "screen");
    scene.fill_labeled(logo, "highlight", "logo");
    scene.fill_labeled(panel, "panel", "menu");
    for (r, label) in buttons.iter().zip(["new-game", "continue", "exit"]) {
        scene.fill_labeled(*r, "accent", label);
    }
    scene
}

/// A card built from linked nodes, moved into place as one group, above a
/// footer that is aligned on its own
pub fn linked(config: &LayoutConfig) -> Scene {
    let mut scene = Scene::new("linked", config);
    let screen = scene.bounds;
    let frame = screen.inset(config.margin);

    let nodes = Nodes::new();
    let header = nodes.wh(60, 10);
    let body = nodes.wh(60, 30);
    let badge = nodes.wh(8, 8);
    let footer = nodes.wh(frame.dx(), 10);

    body.stack_y(header, 0.0, 1.0);
    badge.nest(body, 1.0, 1.0);
    header.align_group(0.5, 0.0, &frame, 0.5, 0.0);
    footer.align_self(0.5, 1.0, &frame, 0.5, 1.0);
    debug!("card group has {} nodes", header.group_len());

    scene.fill(screen, "screen");
    scene.fill_labeled(body.rect(), "panel", "body");
    scene.fill_labeled(header.rect(), "accent", "header");
    scene.fill_labeled(badge.rect(), "highlight", "badge");
    scene.fill_labeled(footer.rect(), "muted", "footer");
    scene
}
