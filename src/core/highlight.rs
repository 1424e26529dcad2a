//! Hover and selection state expressed as class-list instructions.
//!
//! The web layer owns the elements; this module only decides which classes
//! should change. [`diff`] is a pure function of two [`HighlightState`]s.

use super::constants::{FADE_DELAY_MS, HOVER_DELAY_MS};
use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassName {
    Highlighted,
    Selected,
    Visible,
}

impl ClassName {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassName::Highlighted => "highlighted",
            ClassName::Selected => "selected",
            ClassName::Visible => "visible",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassTarget {
    ProjectItem(usize),
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassOp {
    pub target: ClassTarget,
    pub class: ClassName,
    pub add: bool,
}

pub type ClassChanges = SmallVec<[ClassOp; 8]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
    pub description_visible: bool,
}

impl HighlightState {
    fn has(&self, target: ClassTarget, class: ClassName) -> bool {
        match (target, class) {
            (ClassTarget::ProjectItem(i), ClassName::Highlighted) => self.hovered == Some(i),
            (ClassTarget::ProjectItem(i), ClassName::Selected) => self.selected == Some(i),
            (ClassTarget::Description, ClassName::Visible) => self.description_visible,
            _ => false,
        }
    }
}

/// Instructions that turn `prev` into `next`; empty when nothing changed.
pub fn diff(prev: &HighlightState, next: &HighlightState) -> ClassChanges {
    let mut ops = ClassChanges::new();
    let mut touched: SmallVec<[usize; 4]> = SmallVec::new();
    for i in [prev.hovered, next.hovered, prev.selected, next.selected]
        .into_iter()
        .flatten()
    {
        if !touched.contains(&i) {
            touched.push(i);
        }
    }
    let targets = touched
        .into_iter()
        .flat_map(|i| {
            [
                (ClassTarget::ProjectItem(i), ClassName::Highlighted),
                (ClassTarget::ProjectItem(i), ClassName::Selected),
            ]
        })
        .chain([(ClassTarget::Description, ClassName::Visible)]);
    for (target, class) in targets {
        let before = prev.has(target, class);
        let after = next.has(target, class);
        if before != after {
            ops.push(ClassOp {
                target,
                class,
                add: after,
            });
        }
    }
    ops
}

/// Full instruction set for `item_count` items, used to sync a fresh page.
pub fn render_instructions(state: &HighlightState, item_count: usize) -> Vec<ClassOp> {
    let mut ops = Vec::with_capacity(item_count * 2 + 1);
    for i in 0..item_count {
        for class in [ClassName::Highlighted, ClassName::Selected] {
            let target = ClassTarget::ProjectItem(i);
            ops.push(ClassOp {
                target,
                class,
                add: state.has(target, class),
            });
        }
    }
    ops.push(ClassOp {
        target: ClassTarget::Description,
        class: ClassName::Visible,
        add: state.description_visible,
    });
    ops
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Hover held long enough: bring the project into focus.
    Focus(usize),
    /// Focus settled: show the description panel.
    Reveal(usize),
}

#[derive(Clone, Copy, Debug)]
enum Stage {
    Waiting { focus_at: Instant },
    Focused { reveal_at: Instant },
    Revealed,
}

/// Delayed hover reaction: highlight now, focus later, reveal after that.
#[derive(Clone, Copy, Debug)]
pub struct HoverIntent {
    hover_delay: Duration,
    fade_delay: Duration,
    active: Option<(usize, Stage)>,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(HOVER_DELAY_MS),
            Duration::from_millis(FADE_DELAY_MS),
        )
    }
}

impl HoverIntent {
    pub fn new(hover_delay: Duration, fade_delay: Duration) -> Self {
        Self {
            hover_delay,
            fade_delay,
            active: None,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.active.map(|(i, _)| i)
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.active, Some((_, Stage::Revealed)))
    }

    /// Pointer entered `index`. Re-entering the same index keeps its timers.
    pub fn enter(&mut self, index: usize, now: Instant) {
        if self.hovered() == Some(index) {
            return;
        }
        self.active = Some((
            index,
            Stage::Waiting {
                focus_at: now + self.hover_delay,
            },
        ));
    }

    /// Pointer left; any pending focus or reveal is cancelled.
    pub fn leave(&mut self) {
        self.active = None;
    }

    /// Fire whichever deadline has passed. At most one event per call.
    pub fn poll(&mut self, now: Instant) -> Option<HoverEvent> {
        let (index, stage) = self.active.as_mut()?;
        match *stage {
            Stage::Waiting { focus_at } if now >= focus_at => {
                *stage = Stage::Focused {
                    reveal_at: now + self.fade_delay,
                };
                Some(HoverEvent::Focus(*index))
            }
            Stage::Focused { reveal_at } if now >= reveal_at => {
                *stage = Stage::Revealed;
                Some(HoverEvent::Reveal(*index))
            }
            _ => None,
        }
    }
}
