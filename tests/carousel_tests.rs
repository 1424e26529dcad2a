// Host-side tests for the carousel controller: input in, frame reports out.

use folio_web::core::{
    Carousel, CarouselError, CarouselEvent, CarouselFrame, ClassName, ClassTarget, ConfigError,
    DeviceClass, Environment, HoverSource, KeyCommand, SliderConfig, Viewport, PROJECTS,
};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

const DT: Duration = Duration::from_millis(16);
const CENTER: Vec2 = Vec2::new(960.0, 540.0);

fn env() -> Environment {
    Environment::new(Viewport::new(1920.0, 1080.0, 1.0), DeviceClass::Desktop)
}

fn config() -> SliderConfig {
    let mut c = SliderConfig::for_device(DeviceClass::Desktop);
    // 300px tiles at 1920px, 350px pitch
    c.tile_size_vw = 15.625;
    c
}

fn carousel() -> Carousel {
    Carousel::new(config(), env(), (0..PROJECTS.len()).collect()).unwrap()
}

struct Clock {
    now: Instant,
}

impl Clock {
    fn new() -> Self {
        Self { now: Instant::now() }
    }

    fn tick(&mut self, c: &mut Carousel) -> CarouselFrame {
        self.now += DT;
        c.frame(DT, self.now)
    }

    fn run(&mut self, c: &mut Carousel, frames: usize) -> CarouselFrame {
        let mut last = self.tick(c);
        for _ in 1..frames {
            last = self.tick(c);
        }
        last
    }
}

#[test]
fn constructor_rejects_bad_input() {
    assert_eq!(
        Carousel::new(config(), env(), vec![]).unwrap_err(),
        CarouselError::Empty
    );
    assert_eq!(
        Carousel::new(config(), env(), vec![0, 9]).unwrap_err(),
        CarouselError::UnknownProject { slot: 1, project: 9 }
    );
    let mut bad = config();
    bad.ease = 0.0;
    assert_eq!(
        Carousel::new(bad, env(), vec![0]).unwrap_err(),
        CarouselError::Config(ConfigError::EaseOutOfRange(0.0))
    );
}

#[test]
fn first_frame_reports_info_once() {
    let mut c = carousel();
    let mut clock = Clock::new();
    let first = clock.tick(&mut c);
    let focused = first.focused.expect("a tile is always focused");
    assert_eq!(first.info, Some(&PROJECTS[focused]));
    assert_eq!(first.tiles.len(), PROJECTS.len());
    assert!((0.0..1.0).contains(&first.progress));
    assert!(first.classes.iter().any(|op| op.target == ClassTarget::ProjectItem(focused)
        && op.class == ClassName::Selected
        && op.add));

    let second = clock.tick(&mut c);
    assert_eq!(second.info, None);
    assert!(second.classes.is_empty());
}

#[test]
fn slide_converges_on_the_project() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.slide_to(3).unwrap();
    assert!(c.is_sliding());

    let mut settled = None;
    for _ in 0..120 {
        let f = clock.tick(&mut c);
        if f.slide_settled.is_some() {
            settled = f.slide_settled;
            break;
        }
    }
    assert_eq!(settled, Some(3));
    assert!(!c.is_sliding());
    assert_eq!(c.scroll().target, c.offset_for_project(3).unwrap());

    let f = clock.run(&mut c, 200);
    assert_eq!(f.focused, Some(3));
    let tile = f.tiles.iter().find(|t| t.project == 3).unwrap();
    assert!((tile.center - CENTER).length() < 1.0);
}

#[test]
fn slide_to_missing_project_fails() {
    let mut c = Carousel::new(config(), env(), vec![0, 1, 2]).unwrap();
    assert_eq!(c.slide_to(5), Err(CarouselError::NoTileForProject(5)));
    assert!(!c.is_sliding());
}

#[test]
fn arrow_keys_step_one_tile() {
    let mut c = carousel();
    let mut clock = Clock::new();
    assert!(c.key(KeyCommand::First));
    assert_eq!(clock.run(&mut c, 200).focused, Some(0));

    c.key(KeyCommand::Next);
    assert_eq!(clock.run(&mut c, 200).focused, Some(1));

    c.key(KeyCommand::Previous);
    c.key(KeyCommand::Previous);
    assert_eq!(clock.run(&mut c, 200).focused, Some(6));

    c.key(KeyCommand::Last);
    assert_eq!(clock.run(&mut c, 200).focused, Some(6));
    c.key(KeyCommand::First);
    assert_eq!(clock.run(&mut c, 200).focused, Some(0));
}

#[test]
fn click_on_centred_tile_opens_it() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.key(KeyCommand::First);
    clock.run(&mut c, 200);

    assert!(c.pointer_down(CENTER, 0.0));
    let ev = c.pointer_up(CENTER + Vec2::new(2.0, 1.0), 120.0);
    assert_eq!(ev, Some(CarouselEvent::Open(0)));
}

#[test]
fn drag_does_not_open() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.key(KeyCommand::First);
    clock.run(&mut c, 200);

    let before = c.scroll().target;
    c.pointer_down(CENTER, 0.0);
    c.pointer_move(CENTER - Vec2::new(100.0, 0.0), clock.now);
    assert_eq!(c.pointer_up(CENTER - Vec2::new(100.0, 0.0), 200.0), None);
    assert_eq!(c.scroll().target, before - 100.0 * c.config().speed);
}

#[test]
fn disabled_input_is_refused() {
    let mut c = carousel();
    c.set_input_enabled(false);
    assert!(!c.input_enabled());
    assert!(!c.pointer_down(CENTER, 0.0));
    assert!(!c.wheel(Vec2::new(0.0, 40.0)));
    assert!(!c.key(KeyCommand::Next));
    assert_eq!(c.click_item(2), None);
    assert_eq!(c.scroll().target, 0.0);

    c.set_input_enabled(true);
    assert!(c.wheel(Vec2::new(0.0, 40.0)));
    assert_eq!(c.scroll().target, -c.config().wheel_step);
}

#[test]
fn press_is_refused_while_sliding() {
    let mut c = carousel();
    c.slide_to(2).unwrap();
    assert!(!c.pointer_down(CENTER, 0.0));
}

#[test]
fn list_hover_slides_after_delay() {
    let mut c = carousel();
    let t0 = Instant::now();
    c.set_hover(HoverSource::List, Some(5), t0);

    c.frame(DT, t0 + Duration::from_millis(100));
    assert!(!c.is_sliding());
    c.frame(DT, t0 + Duration::from_millis(301));
    assert!(c.is_sliding());

    let f = c.frame(DT, t0 + Duration::from_millis(410));
    assert_eq!(f.description, Some(PROJECTS[5].description));
    assert!(f.classes.iter().any(|op| op.target == ClassTarget::Description && op.add));
}

#[test]
fn leaving_cancels_pending_hover() {
    let mut c = carousel();
    let t0 = Instant::now();
    c.set_hover(HoverSource::List, Some(5), t0);
    c.set_hover(HoverSource::List, None, t0 + Duration::from_millis(100));
    c.frame(DT, t0 + Duration::from_millis(400));
    assert!(!c.is_sliding());
}

#[test]
fn canvas_hover_grows_tile_without_sliding() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.key(KeyCommand::First);
    clock.run(&mut c, 200);

    c.pointer_move(CENTER, clock.now);
    clock.now += Duration::from_millis(400);
    let f = clock.run(&mut c, 30);
    assert!(!c.is_sliding());
    let hovered = f.tiles.iter().find(|t| t.project == 0).unwrap();
    assert!(hovered.scale > 1.05);
    assert!(f.tiles.iter().filter(|t| t.project != 0).all(|t| t.scale == 1.0));

    c.pointer_leave(clock.now);
    let f = clock.run(&mut c, 100);
    let tile = f.tiles.iter().find(|t| t.project == 0).unwrap();
    assert!(tile.scale < 1.01);
}

#[test]
fn click_item_jumps_and_opens() {
    let mut c = carousel();
    assert_eq!(c.click_item(4), Some(CarouselEvent::Open(4)));
    assert_eq!(c.scroll().target, c.offset_for_project(4).unwrap());
    assert_eq!(c.click_item(99), None);
}

#[test]
fn resize_keeps_focus() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.key(KeyCommand::First);
    c.key(KeyCommand::Next);
    c.key(KeyCommand::Next);
    assert_eq!(clock.run(&mut c, 200).focused, Some(2));

    c.resize(env().with_viewport(Viewport::new(1280.0, 720.0, 2.0)));
    assert_eq!(c.layout().pitch(), 250.0);
    let f = clock.run(&mut c, 5);
    assert_eq!(f.focused, Some(2));
    let tile = f.tiles.iter().find(|t| t.project == 2).unwrap();
    assert!((tile.center.x - 640.0).abs() < 1.0);
    assert_eq!(tile.center.y, 360.0);
}

#[test]
fn reset_returns_to_start() {
    let mut c = carousel();
    let mut clock = Clock::new();
    clock.tick(&mut c);
    c.key(KeyCommand::Last);
    c.slide_to(3).unwrap();
    clock.run(&mut c, 10);

    c.reset();
    assert!(!c.is_sliding());
    assert_eq!(c.scroll().target, 0.0);
    assert_eq!(c.scroll().current, 0.0);
    let f = clock.tick(&mut c);
    assert!(f.info.is_some());
}

fn drag_by(c: &mut Carousel, dx: f32, now: Instant) -> f32 {
    c.pointer_move(CENTER + Vec2::new(dx, 0.0), now);
    c.scroll().target
}

#[test]
fn wheel_and_keys_wait_for_the_drag_to_end() {
    let mut c = carousel();
    let now = Instant::now();
    let speed = c.config().speed;
    assert!(c.pointer_down(CENTER, 0.0));
    assert_eq!(drag_by(&mut c, 100.0, now), 100.0 * speed);

    assert!(!c.wheel(Vec2::new(0.0, 40.0)));
    assert!(!c.key(KeyCommand::Next));
    assert_eq!(c.scroll().target, 100.0 * speed);

    // the drag keeps following the pointer from where it started
    assert_eq!(drag_by(&mut c, 101.0, now), 101.0 * speed);

    c.pointer_up(CENTER + Vec2::new(101.0, 0.0), 300.0);
    assert!(c.wheel(Vec2::new(0.0, 40.0)));
    assert_eq!(c.scroll().target, 101.0 * speed - c.config().wheel_step);
}

#[test]
fn list_hover_does_not_slide_during_a_drag() {
    let mut c = carousel();
    let t0 = Instant::now();
    let speed = c.config().speed;
    c.pointer_down(CENTER, 0.0);
    drag_by(&mut c, 100.0, t0);

    c.set_hover(HoverSource::List, Some(4), t0);
    c.frame(DT, t0 + Duration::from_millis(350));
    assert!(!c.is_sliding());
    assert_eq!(c.scroll().target, 100.0 * speed);

    assert_eq!(drag_by(&mut c, 101.0, t0), 101.0 * speed);
    c.frame(DT, t0 + Duration::from_millis(370));
    assert_eq!(c.scroll().target, 101.0 * speed);
}

#[test]
fn click_item_replaces_a_running_slide() {
    let mut c = carousel();
    let mut clock = Clock::new();
    c.slide_to(3).unwrap();
    clock.tick(&mut c);

    assert_eq!(c.click_item(5), Some(CarouselEvent::Open(5)));
    assert!(!c.is_sliding());
    let to = c.offset_for_project(5).unwrap();
    clock.run(&mut c, 5);
    assert_eq!(c.scroll().target, to);
}
