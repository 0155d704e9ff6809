//! Object registry, two-phase tick and one-shot task scheduler.

use std::rc::Rc;

use super::{ObjectRef, UpdateContext};
use crate::gfx::rendering::Graphics;

/// A callback due once scene time passes `due`.
struct ScheduledTask {
    due: f32,
    action: Box<dyn FnOnce(f32)>,
}

/// Live objects in insertion order, pending removals and scheduled tasks.
///
/// A tick is `update` followed by `draw`:
///
/// 1. every live object updates, in insertion order
/// 2. queued removals are applied
/// 3. tasks fire, in registration order, and are dropped when their due time
///    is strictly before the new scene time or was already reached when the
///    tick began; the rest stay queued
/// 4. tasks scheduled during step 1 are queued
/// 5. the scene clock advances by the frame time
///
/// An object removed during a tick has still been updated in that tick.
#[derive(Default)]
pub struct Scene {
    objects: Vec<ObjectRef>,
    removals: Vec<ObjectRef>,
    tasks: Vec<ScheduledTask>,
    elapsed: f32,
}

fn same_object(a: &ObjectRef, b: &ObjectRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds of scene time since construction.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, object: &ObjectRef) -> bool {
        self.objects.iter().any(|o| same_object(o, object))
    }

    pub fn objects(&self) -> &[ObjectRef] {
        &self.objects
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Adding an object that is already live does nothing.
    pub fn add(&mut self, object: ObjectRef) {
        if !self.contains(&object) {
            log::debug!("Scene: added {}", object.borrow().name());
            self.objects.push(object);
        }
    }

    /// Queues a live object for removal after the next update pass.
    pub fn remove(&mut self, object: &ObjectRef) {
        if self.contains(object) && !self.removals.iter().any(|o| same_object(o, object)) {
            self.removals.push(Rc::clone(object));
        }
    }

    /// Runs `action` on the first tick that ends more than `delay` seconds
    /// from now, or on the next tick at all when `delay` is zero. The action
    /// receives the scene time it fired at.
    pub fn schedule_task(&mut self, delay: f32, action: impl FnOnce(f32) + 'static) {
        self.push_task(delay, Box::new(action));
    }

    fn push_task(&mut self, delay: f32, action: Box<dyn FnOnce(f32)>) {
        self.tasks.push(ScheduledTask {
            due: self.elapsed + delay,
            action,
        });
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        ctx.elapsed = self.elapsed;
        for object in self.objects.iter() {
            object.borrow_mut().update(ctx);
        }

        for object in std::mem::take(&mut ctx.commands.removals) {
            self.remove(&object);
        }
        for object in std::mem::take(&mut self.removals) {
            if let Some(index) = self.objects.iter().position(|o| same_object(o, &object)) {
                log::debug!("Scene: removed {}", object.borrow().name());
                self.objects.remove(index);
            }
        }

        let now = self.elapsed + ctx.delta_time;
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due < now || task.due <= self.elapsed);
        self.tasks = pending;
        for task in due {
            (task.action)(now);
        }

        for (delay, action) in std::mem::take(&mut ctx.commands.tasks) {
            self.push_task(delay, action);
        }

        self.elapsed = now;
    }

    pub fn draw(&self, graphics: &mut Graphics) {
        for object in self.objects.iter() {
            object.borrow().draw(graphics);
        }
    }
}
