use std::cell::{Cell, RefCell};
use std::rc::Rc;

use planes3d::game::{GameObject, ObjectRef, Scene, Transform, UpdateContext};
use planes3d::gfx::camera::Camera;
use planes3d::input::KeyboardState;

/// Appends its id to a shared journal on every update.
struct Recorder {
    id: u32,
    transform: Transform,
    journal: Rc<RefCell<Vec<u32>>>,
}

impl GameObject for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
        self.journal.borrow_mut().push(self.id);
    }
}

fn recorder(id: u32, journal: &Rc<RefCell<Vec<u32>>>) -> ObjectRef {
    Rc::new(RefCell::new(Recorder {
        id,
        transform: Transform::default(),
        journal: Rc::clone(journal),
    }))
}

fn tick(scene: &mut Scene, dt: f32) {
    let keys = KeyboardState::new();
    let mut camera = Camera::default();
    let mut ctx = UpdateContext::new(dt, &keys, &mut camera);
    scene.update(&mut ctx);
}

#[test]
fn updates_run_in_insertion_order() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    for id in [3, 1, 2] {
        scene.add(recorder(id, &journal));
    }

    tick(&mut scene, 0.1);
    tick(&mut scene, 0.1);
    assert_eq!(*journal.borrow(), vec![3, 1, 2, 3, 1, 2]);
}

#[test]
fn removal_takes_effect_after_one_more_update() {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new();
    let a = recorder(1, &journal);
    let b = recorder(2, &journal);
    scene.add(Rc::clone(&a));
    scene.add(Rc::clone(&b));

    scene.remove(&a);
    // Removing twice is the same as removing once
    scene.remove(&a);
    tick(&mut scene, 0.1);
    tick(&mut scene, 0.1);

    assert_eq!(*journal.borrow(), vec![1, 2, 2]);
    assert!(!scene.contains(&a));
    assert_eq!(scene.len(), 1);

    // A removed object can be added back
    scene.add(Rc::clone(&a));
    assert_eq!(scene.len(), 2);
}

#[test]
fn tasks_fire_once_when_due() {
    let mut scene = Scene::new();
    let fired = Rc::new(Cell::new(0u32));

    let counter = Rc::clone(&fired);
    scene.schedule_task(1.0, move |_| counter.set(counter.get() + 1));

    for _ in 0..3 {
        tick(&mut scene, 0.25);
    }
    assert_eq!(fired.get(), 0);

    // Due time equal to the new clock still waits: the check is strict
    tick(&mut scene, 0.25);
    assert_eq!(fired.get(), 0);

    tick(&mut scene, 0.25);
    assert_eq!(fired.get(), 1);

    for _ in 0..10 {
        tick(&mut scene, 0.25);
    }
    assert_eq!(fired.get(), 1);
}

#[test]
fn unfired_tasks_stay_queued() {
    let mut scene = Scene::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for (id, delay) in [(1, 0.5), (2, 0.0), (3, 2.0)] {
        let order = Rc::clone(&order);
        scene.schedule_task(delay, move |_| order.borrow_mut().push(id));
    }

    tick(&mut scene, 0.125);
    assert_eq!(*order.borrow(), vec![2]);
    assert_eq!(scene.pending_tasks(), 2);

    for _ in 0..4 {
        tick(&mut scene, 0.125);
    }
    assert_eq!(*order.borrow(), vec![2, 1]);
    assert_eq!(scene.pending_tasks(), 1);
}

#[test]
fn paused_ticks_still_run_immediate_tasks() {
    let mut scene = Scene::new();
    let fired_at = Rc::new(Cell::new(-1.0f32));
    let slot = Rc::clone(&fired_at);
    scene.schedule_task(0.0, move |t| slot.set(t));

    tick(&mut scene, 0.0);
    assert_eq!(fired_at.get(), 0.0);
    assert_eq!(scene.pending_tasks(), 0);
    assert_eq!(scene.elapsed(), 0.0);
}
