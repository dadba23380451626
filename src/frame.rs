use crate::canvas::CanvasSurface;
use garden_core::{Animator, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext<Sc> {
    pub animator: Animator<Sc>,
    pub surface: CanvasSurface,
}

impl<Sc: Scene> FrameContext<Sc> {
    pub fn frame(&mut self) {
        self.animator.tick(&mut self.surface);
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until the page goes away.
pub fn start_loop<Sc: Scene + 'static>(frame_ctx: Rc<RefCell<FrameContext<Sc>>>) {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
